//! Value validators used by class group rules.

use once_cell::sync::Lazy;
use regex::Regex;

pub(super) type Validator = fn(&str) -> bool;

// Patterns are static; a compile failure disables the matching rule instead
// of panicking.
static ARBITRARY_VALUE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\[(?:([a-z-]+):)?(.+)\]$").ok());
static FRACTION: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\d+/\d+$").ok());
static TSHIRT: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(\d+(\.\d+)?)?(xs|sm|md|lg|xl)$").ok());
static LENGTH_UNIT: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"\d+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|\b(calc|min|max|clamp)\(.+\)|^0$",
    )
    .ok()
});
static COLOR_FUNCTION: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(rgba?|hsla?|hwb|(ok)?(lab|lch)|color-mix)\(.+\)$").ok());
static SHADOW: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^(inset_)?-?((\d+)?\.?(\d+)[a-z]+|0)_-?((\d+)?\.?(\d+)[a-z]+|0)").ok()
});

fn pattern_matches(pattern: &Lazy<Option<Regex>>, value: &str) -> bool {
    pattern
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

/// Split `[label:value]` into its optional label and value.
fn arbitrary_parts(value: &str) -> Option<(Option<&str>, &str)> {
    let captures = ARBITRARY_VALUE.as_ref()?.captures(value)?;
    let inner = captures.get(2)?.as_str();
    Some((captures.get(1).map(|label| label.as_str()), inner))
}

pub(super) fn is_empty(value: &str) -> bool {
    value.is_empty()
}

pub(super) fn is_any(value: &str) -> bool {
    !value.is_empty()
}

pub(super) fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite)
}

pub(super) fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.parse::<i64>().is_ok()
}

pub(super) fn is_fraction(value: &str) -> bool {
    pattern_matches(&FRACTION, value)
}

pub(super) fn is_tshirt_size(value: &str) -> bool {
    pattern_matches(&TSHIRT, value)
}

pub(super) fn is_arbitrary(value: &str) -> bool {
    arbitrary_parts(value).is_some()
}

pub(super) fn is_arbitrary_length(value: &str) -> bool {
    arbitrary_parts(value).is_some_and(|(label, inner)| match label {
        Some(label) => label == "length",
        None => pattern_matches(&LENGTH_UNIT, inner),
    })
}

pub(super) fn is_arbitrary_number(value: &str) -> bool {
    arbitrary_parts(value).is_some_and(|(label, inner)| match label {
        Some(label) => label == "number",
        None => is_number(inner),
    })
}

pub(super) fn is_arbitrary_shadow(value: &str) -> bool {
    arbitrary_parts(value).is_some_and(|(label, inner)| match label {
        Some(label) => label == "shadow",
        None => pattern_matches(&SHADOW, inner),
    })
}

pub(super) fn is_arbitrary_image(value: &str) -> bool {
    arbitrary_parts(value).is_some_and(|(label, inner)| match label {
        Some(label) => label == "image" || label == "url",
        None => inner.starts_with("url(") || inner.contains("gradient("),
    })
}

pub(super) fn is_arbitrary_color(value: &str) -> bool {
    arbitrary_parts(value).is_some_and(|(label, inner)| match label {
        Some(label) => label == "color",
        None => inner.starts_with('#') || pattern_matches(&COLOR_FUNCTION, inner),
    })
}

/// Spacing scale: numbers, `px`, or arbitrary values.
pub(super) fn is_spacing(value: &str) -> bool {
    is_number(value) || value == "px" || is_arbitrary(value)
}

pub(super) fn is_margin(value: &str) -> bool {
    is_spacing(value) || value == "auto"
}

pub(super) fn is_inset(value: &str) -> bool {
    is_spacing(value) || is_fraction(value) || matches!(value, "auto" | "full")
}

pub(super) fn is_size(value: &str) -> bool {
    is_spacing(value)
        || is_fraction(value)
        || is_tshirt_size(value)
        || matches!(
            value,
            "auto" | "full" | "screen" | "min" | "max" | "fit" | "svw" | "lvw" | "dvw" | "svh"
                | "lvh" | "dvh" | "none" | "prose" | "px"
        )
        || value.starts_with("screen-")
}

/// Border, ring and outline widths.
pub(super) fn is_width(value: &str) -> bool {
    value.is_empty() || is_number(value) || is_arbitrary_length(value)
}

pub(super) fn is_font_size(value: &str) -> bool {
    value == "base" || is_tshirt_size(value) || is_arbitrary_length(value)
}

pub(super) fn is_radius(value: &str) -> bool {
    value.is_empty()
        || is_tshirt_size(value)
        || matches!(value, "none" | "full")
        || is_arbitrary(value)
}

pub(super) fn is_shadow_size(value: &str) -> bool {
    value.is_empty()
        || is_tshirt_size(value)
        || matches!(value, "inner" | "none")
        || is_arbitrary_shadow(value)
}

/// Colors: anything not claimed by a more specific rule, excluding
/// arbitrary values that are clearly lengths.
pub(super) fn is_color(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if value.starts_with('[') {
        return is_arbitrary_color(value) || !is_arbitrary_length(value);
    }
    true
}

pub(super) fn is_integer_or_arbitrary(value: &str) -> bool {
    is_integer(value) || is_arbitrary(value)
}

pub(super) fn is_number_or_arbitrary(value: &str) -> bool {
    is_number(value) || is_arbitrary(value)
}

pub(super) fn is_grow(value: &str) -> bool {
    value.is_empty() || is_number_or_arbitrary(value)
}

pub(super) fn is_z_index(value: &str) -> bool {
    value == "auto" || is_integer_or_arbitrary(value)
}

pub(super) fn is_order(value: &str) -> bool {
    matches!(value, "first" | "last" | "none") || is_integer_or_arbitrary(value)
}

pub(super) fn is_grid_template(value: &str) -> bool {
    matches!(value, "none" | "subgrid") || is_integer_or_arbitrary(value)
}

pub(super) fn is_span(value: &str) -> bool {
    value == "full" || is_integer_or_arbitrary(value)
}

pub(super) fn is_line_position(value: &str) -> bool {
    value == "auto" || is_integer_or_arbitrary(value)
}

pub(super) fn is_flex(value: &str) -> bool {
    matches!(value, "1" | "auto" | "initial" | "none") || is_arbitrary(value)
}

pub(super) fn is_font_weight(value: &str) -> bool {
    matches!(
        value,
        "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold" | "extrabold"
            | "black"
    ) || is_arbitrary_number(value)
}

pub(super) fn is_leading(value: &str) -> bool {
    matches!(
        value,
        "none" | "tight" | "snug" | "normal" | "relaxed" | "loose"
    ) || is_number(value)
        || is_arbitrary(value)
}

pub(super) fn is_tracking(value: &str) -> bool {
    matches!(
        value,
        "tighter" | "tight" | "normal" | "wide" | "wider" | "widest"
    ) || is_arbitrary(value)
}

pub(super) fn is_duration(value: &str) -> bool {
    is_number_or_arbitrary(value)
}

pub(super) fn is_ease(value: &str) -> bool {
    matches!(value, "linear" | "in" | "out" | "in-out") || is_arbitrary(value)
}

pub(super) fn is_transition(value: &str) -> bool {
    value.is_empty()
        || matches!(
            value,
            "none" | "all" | "colors" | "opacity" | "shadow" | "transform"
        )
        || is_arbitrary(value)
}

pub(super) fn is_animation(value: &str) -> bool {
    matches!(value, "none" | "spin" | "ping" | "pulse" | "bounce") || is_arbitrary(value)
}

pub(super) fn is_blur(value: &str) -> bool {
    value.is_empty() || value == "none" || is_tshirt_size(value) || is_arbitrary(value)
}

pub(super) fn is_translate(value: &str) -> bool {
    is_spacing(value) || is_fraction(value) || value == "full"
}

pub(super) fn is_bg_image(value: &str) -> bool {
    value == "none" || is_arbitrary_image(value)
}

pub(super) fn is_aspect(value: &str) -> bool {
    matches!(value, "auto" | "square" | "video") || is_arbitrary(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arbitrary_lengths_are_distinguished_from_colors() {
        assert!(is_arbitrary_length("[14px]"));
        assert!(is_arbitrary_length("[calc(100%-2rem)]"));
        assert!(is_arbitrary_length("[length:var(--gap)]"));
        assert!(!is_arbitrary_length("[#fff]"));
        assert!(is_arbitrary_color("[#fff]"));
        assert!(is_arbitrary_color("[rgb(0,0,0)]"));
        assert!(is_color("[#fff]"));
        assert!(!is_color("[14px]"));
    }

    #[test]
    fn scale_validators() {
        assert!(is_tshirt_size("2xl"));
        assert!(is_tshirt_size("sm"));
        assert!(!is_tshirt_size("base"));
        assert!(is_font_size("base"));
        assert!(is_fraction("1/2"));
        assert!(!is_fraction("1/"));
        assert!(is_spacing("0.5"));
        assert!(is_spacing("px"));
        assert!(!is_spacing("auto"));
        assert!(is_margin("auto"));
    }

    #[test]
    fn arbitrary_shadow_and_image() {
        assert!(is_arbitrary_shadow("[0_35px_60px_-15px_rgba(0,0,0,0.3)]"));
        assert!(is_arbitrary_image("[url('/leaf.png')]"));
        assert!(!is_arbitrary_image("[#fff]"));
    }
}
