//! Design tokens for the Grove design system.
//!
//! The visual language of the Grove platform:
//! - Grove Green: primary brand color.
//! - Bark Brown: text and dark accents.
//! - Cream: background and light surfaces.

use std::collections::BTreeMap;

/// Version of the token table.
pub const TOKENS_VERSION: &str = "0.2.0";

/// Key used for a palette's default shade in Tailwind color maps.
pub const DEFAULT_SHADE: &str = "DEFAULT";

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Shade key (e.g., "600").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Named palette: a default value plus numeric shades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier used in class names (`bg-grove-600`).
    pub id: &'static str,
    /// Value used for the bare palette name (`bg-grove`).
    pub default: &'static str,
    /// Shades from lightest to darkest.
    pub shades: &'static [ColorToken],
}

impl Palette {
    /// Hex value of a numeric shade.
    #[must_use]
    pub fn shade(&self, name: &str) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.hex)
    }

    /// Hex value for a shade key, accepting [`DEFAULT_SHADE`].
    #[must_use]
    pub fn hex(&self, key: &str) -> Option<&'static str> {
        if key == DEFAULT_SHADE {
            Some(self.default)
        } else {
            self.shade(key)
        }
    }

    /// Shade map in Tailwind's shape, `DEFAULT` included.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, &'static str> {
        let mut map: BTreeMap<&'static str, &'static str> = self
            .shades
            .iter()
            .map(|token| (token.name, token.hex))
            .collect();
        map.insert(DEFAULT_SHADE, self.default);
        map
    }
}

/// Grove Green, the primary brand color.
pub const GROVE: Palette = Palette {
    id: "grove",
    default: "#16a34a",
    shades: &[
        ColorToken {
            name: "50",
            hex: "#f0fdf4",
        },
        ColorToken {
            name: "600",
            hex: "#16a34a",
        },
        ColorToken {
            name: "900",
            hex: "#14532d",
        },
    ],
};

/// Bark Brown for text and dark accents.
pub const BARK: Palette = Palette {
    id: "bark",
    default: "#3d2914",
    shades: &[
        ColorToken {
            name: "50",
            hex: "#f9f6f3",
        },
        ColorToken {
            name: "900",
            hex: "#3d2914",
        },
    ],
};

/// Cream for backgrounds and light surfaces.
pub const CREAM: Palette = Palette {
    id: "cream",
    default: "#fefdfb",
    shades: &[
        ColorToken {
            name: "50",
            hex: "#fefdfb",
        },
        ColorToken {
            name: "500",
            hex: "#e2ddd0",
        },
    ],
};

/// Every palette, in display order.
pub const COLORS: [Palette; 3] = [GROVE, BARK, CREAM];

/// Look up a palette by id.
#[must_use]
pub fn palette(id: &str) -> Option<&'static Palette> {
    COLORS.iter().find(|palette| palette.id == id)
}

/// Full color table keyed by palette id.
#[must_use]
pub fn color_map() -> BTreeMap<&'static str, BTreeMap<&'static str, &'static str>> {
    COLORS
        .iter()
        .map(|palette| (palette.id, palette.to_map()))
        .collect()
}

/// Named spacing step in rem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpacingToken {
    /// Scale name.
    pub name: &'static str,
    /// CSS length.
    pub value: &'static str,
}

/// Layout spacing scale, extending Tailwind's numeric scale.
///
/// GroveUI-specific additions with no upstream token file yet: `gutter` is the
/// annotation column width, `prose` the reading measure, `breath` the gap
/// between sections, and `leaf` the small inline gap.
pub const SPACING: [SpacingToken; 4] = [
    SpacingToken {
        name: "gutter",
        value: "16rem",
    },
    SpacingToken {
        name: "prose",
        value: "42rem",
    },
    SpacingToken {
        name: "breath",
        value: "2.5rem",
    },
    SpacingToken {
        name: "leaf",
        value: "0.375rem",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn every_token_is_a_hex_color() {
        for palette in COLORS {
            assert!(is_hex_color(palette.default), "{}", palette.id);
            for token in palette.shades {
                assert!(is_hex_color(token.hex), "{}-{}", palette.id, token.name);
            }
        }
    }

    #[test]
    fn lookups_resolve_default_and_shades() {
        let grove = palette("grove").unwrap();
        assert_eq!(grove.hex(DEFAULT_SHADE), Some("#16a34a"));
        assert_eq!(grove.shade("900"), Some("#14532d"));
        assert_eq!(grove.shade("400"), None);
        assert!(palette("moss").is_none());
    }

    #[test]
    fn spacing_scale_uses_rem_lengths() {
        let names: Vec<_> = SPACING.iter().map(|token| token.name).collect();
        assert_eq!(names, ["gutter", "prose", "breath", "leaf"]);
        for token in SPACING {
            let number = token.value.strip_suffix("rem").unwrap();
            assert!(number.parse::<f64>().unwrap() > 0.0, "{}", token.name);
        }
    }

    #[test]
    fn color_map_includes_default_keys() {
        let map = color_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["cream"]["DEFAULT"], "#fefdfb");
        assert_eq!(map["cream"]["500"], "#e2ddd0");
        assert_eq!(map["bark"].len(), 3);
    }
}
