//! Error types for theme persistence, environment access, and configuration.

use thiserror::Error;

use crate::core::theme::ThemePreference;

/// Failure reported by a [`PreferenceStorage`](crate::core::env::PreferenceStorage) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store does not exist in this context (private mode, no window).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backend rejected a read or write.
    #[error("preference storage operation failed")]
    Operation {
        /// Operation identifier (`load` or `store`).
        operation: &'static str,
        /// Key involved in the failing operation.
        key: String,
        /// Backend-specific failure detail.
        detail: String,
    },
}

/// Failure reported while mutating the document root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    /// No document root element could be located.
    #[error("document root unavailable")]
    RootUnavailable,
    /// A DOM call returned an exception.
    #[error("dom operation failed")]
    Dom {
        /// Operation identifier.
        operation: &'static str,
        /// Exception detail reported by the host.
        detail: String,
    },
}

/// Errors surfaced by [`ThemeStore`](crate::core::store::ThemeStore) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The in-memory preference changed but could not be written to storage.
    #[error("failed to persist theme preference")]
    Persist {
        /// Preference that was applied in memory.
        preference: ThemePreference,
        /// Underlying storage failure.
        #[source]
        source: StorageError,
    },
}

/// Errors produced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Configuration document could not be parsed.
    #[error("malformed configuration document")]
    Parse {
        /// Source parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The Tailwind preset and theme store disagree on how dark mode is applied.
    #[error("dark mode strategy does not match theme configuration")]
    DarkModeMismatch {
        /// Class the preset expects on the document root.
        expected: String,
        /// Class the theme store is configured to toggle.
        configured: String,
    },
}
