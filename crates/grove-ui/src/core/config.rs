//! Theme store configuration.
//!
//! # Design
//! - Every field has a default so an empty JSON object is a valid document.
//! - [`ThemeConfig::from_json`] and
//!   [`ThemeStore::try_new`](crate::core::store::ThemeStore::try_new) validate;
//!   [`ThemeStore::new`](crate::core::store::ThemeStore::new) trusts its input.

use serde::{Deserialize, Serialize};

use crate::core::theme::ResolvedTheme;
use crate::error::ConfigError;

/// Storage key used for the persisted preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";
/// Class toggled on the document root while the dark theme is active.
pub const DEFAULT_DARK_CLASS: &str = "dark";
/// Media query consulted for the system preference.
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// Settings for a [`ThemeStore`](crate::core::store::ThemeStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key of the persisted preference entry.
    pub storage_key: String,
    /// Class toggled on the document root for the dark theme.
    pub dark_class: String,
    /// Optional attribute (e.g. `data-theme`) set to `light`/`dark`.
    pub theme_attribute: Option<String>,
    /// Media query used for system detection.
    pub media_query: String,
    /// Theme used for `system` when the media query is unsupported.
    pub system_fallback: ResolvedTheme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            theme_attribute: None,
            media_query: DEFAULT_MEDIA_QUERY.to_string(),
            system_fallback: ResolvedTheme::Light,
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(invalid("storage_key", &self.storage_key, "empty"));
        }
        if !is_single_token(&self.dark_class) {
            return Err(invalid("dark_class", &self.dark_class, "not_a_class_name"));
        }
        if let Some(attribute) = &self.theme_attribute
            && !is_single_token(attribute)
        {
            return Err(invalid("theme_attribute", attribute, "not_an_attribute_name"));
        }
        if self.media_query.trim().is_empty() {
            return Err(invalid("media_query", &self.media_query, "empty"));
        }
        Ok(())
    }
}

fn is_single_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

fn invalid(field: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        value: Some(value.to_string()),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ThemeConfig::from_json("{}").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.system_fallback, ResolvedTheme::Light);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config =
            ThemeConfig::from_json(r#"{"theme_attribute":"data-theme","system_fallback":"dark"}"#)
                .unwrap();
        assert_eq!(config.theme_attribute.as_deref(), Some("data-theme"));
        assert_eq!(config.system_fallback, ResolvedTheme::Dark);
        assert_eq!(config.dark_class, DEFAULT_DARK_CLASS);
    }

    #[test]
    fn invalid_fields_are_reported() {
        let err = ThemeConfig::from_json(r#"{"dark_class":"dark mode"}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "dark_class",
                ..
            }
        ));

        let err = ThemeConfig::from_json(r#"{"storage_key":"  "}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "storage_key",
                reason: "empty",
                ..
            }
        ));
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        let err = ThemeConfig::from_json(r#"{"storageKey":"x"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
