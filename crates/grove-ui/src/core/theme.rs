//! Theme preference and resolved theme values.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User-selected theme preference as persisted in storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the operating system color scheme.
    #[default]
    System,
}

impl ThemePreference {
    /// Every preference, in the order offered to users.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Literal string written to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a stored value; anything outside the closed set yields `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Resolve against the system signal.
    ///
    /// `system_prefers_dark` is `None` when the color-scheme query is
    /// unsupported, in which case `fallback` is used.
    #[must_use]
    pub const fn resolve(
        self,
        system_prefers_dark: Option<bool>,
        fallback: ResolvedTheme,
    ) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => match system_prefers_dark {
                Some(true) => ResolvedTheme::Dark,
                Some(false) => ResolvedTheme::Light,
                None => fallback,
            },
        }
    }
}

impl Display for ThemePreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known theme preference.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference")]
pub struct UnknownPreference {
    /// Rejected input.
    pub value: String,
}

impl FromStr for ThemePreference {
    type Err = UnknownPreference;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnknownPreference {
            value: value.to_string(),
        })
    }
}

/// Display-ready theme; never `system`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ResolvedTheme {
    /// String identifier used in CSS classes and datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the dark class should be present on the document root.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl From<ResolvedTheme> for ThemePreference {
    fn from(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self::Light,
            ResolvedTheme::Dark => Self::Dark,
        }
    }
}

impl Display for ResolvedTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_strings_round_trip() {
        for preference in ThemePreference::ALL {
            assert_eq!(ThemePreference::parse(preference.as_str()), Some(preference));
        }
    }

    #[test]
    fn unknown_strings_are_rejected() {
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(""), None);
        let err = "sepia".parse::<ThemePreference>().unwrap_err();
        assert_eq!(err.value, "sepia");
    }

    #[test]
    fn system_resolves_from_signal_or_fallback() {
        let system = ThemePreference::System;
        assert_eq!(system.resolve(Some(true), ResolvedTheme::Light), ResolvedTheme::Dark);
        assert_eq!(system.resolve(Some(false), ResolvedTheme::Dark), ResolvedTheme::Light);
        assert_eq!(system.resolve(None, ResolvedTheme::Light), ResolvedTheme::Light);
    }

    #[test]
    fn explicit_preferences_ignore_the_system_signal() {
        assert_eq!(
            ThemePreference::Light.resolve(Some(true), ResolvedTheme::Dark),
            ResolvedTheme::Light
        );
        assert_eq!(
            ThemePreference::Dark.resolve(Some(false), ResolvedTheme::Light),
            ResolvedTheme::Dark
        );
    }

    #[test]
    fn resolved_theme_serializes_lowercase() {
        let json = serde_json::to_string(&ResolvedTheme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        assert_eq!(ResolvedTheme::Dark.opposite(), ResolvedTheme::Light);
    }
}
