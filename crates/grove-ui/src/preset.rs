//! Shareable Tailwind preset built from the token table.
//!
//! The preset is serialized in Tailwind's config shape (`darkMode`, `content`,
//! `theme.extend`, `plugins`) so a JS build can load it as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::config::{DEFAULT_DARK_CLASS, ThemeConfig};
use crate::error::ConfigError;
use crate::tokens::{SPACING, color_map};

/// Content globs scanned for class names.
pub const DEFAULT_CONTENT: &str = "./src/**/*.{html,js,svelte,ts}";
/// Typography plugin used for prose styling.
pub const TYPOGRAPHY_PLUGIN: &str = "@tailwindcss/typography";

/// How Tailwind decides that `dark:` variants apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// A `dark` class on an ancestor element, toggled by the theme store.
    #[default]
    Class,
    /// The `prefers-color-scheme` media query alone.
    Media,
}

/// `theme.extend` section of the preset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExtension {
    /// Palette id → shade key → hex value.
    pub colors: BTreeMap<String, BTreeMap<String, String>>,
    /// Spacing name → CSS length.
    pub spacing: BTreeMap<String, String>,
}

/// `theme` section of the preset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetTheme {
    /// Additions to Tailwind's default theme.
    pub extend: ThemeExtension,
}

/// Serializable Tailwind preset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindPreset {
    /// Dark mode strategy.
    pub dark_mode: DarkModeStrategy,
    /// Globs scanned for class names.
    pub content: Vec<String>,
    /// Theme customizations.
    pub theme: PresetTheme,
    /// Plugin module names.
    pub plugins: Vec<String>,
}

impl Default for TailwindPreset {
    fn default() -> Self {
        Self::grove()
    }
}

impl TailwindPreset {
    /// The Grove preset: class-based dark mode and the full token table.
    #[must_use]
    pub fn grove() -> Self {
        let colors = color_map()
            .into_iter()
            .map(|(palette, shades)| {
                let shades = shades
                    .into_iter()
                    .map(|(shade, hex)| (shade.to_string(), hex.to_string()))
                    .collect();
                (palette.to_string(), shades)
            })
            .collect();
        let spacing = SPACING
            .iter()
            .map(|token| (token.name.to_string(), token.value.to_string()))
            .collect();

        Self {
            dark_mode: DarkModeStrategy::Class,
            content: vec![DEFAULT_CONTENT.to_string()],
            theme: PresetTheme {
                extend: ThemeExtension { colors, spacing },
            },
            plugins: vec![TYPOGRAPHY_PLUGIN.to_string()],
        }
    }

    /// Pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Confirm the preset and the theme store toggle the same dark class.
    ///
    /// Tailwind's class strategy keys `dark:` variants off a `dark` class, so
    /// a store configured with another class would never activate them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DarkModeMismatch`] when the classes disagree.
    pub fn validate_against(&self, config: &ThemeConfig) -> Result<(), ConfigError> {
        match self.dark_mode {
            DarkModeStrategy::Class if config.dark_class != DEFAULT_DARK_CLASS => {
                Err(ConfigError::DarkModeMismatch {
                    expected: DEFAULT_DARK_CLASS.to_string(),
                    configured: config.dark_class.clone(),
                })
            }
            DarkModeStrategy::Class | DarkModeStrategy::Media => Ok(()),
        }
    }
}
