#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! GroveUI: a calm, organic design system for the Grove platform.
//!
//! This crate is the aggregate entry point. Category modules can be imported
//! on their own ([`components::editor`], [`components::gutter`],
//! [`components::icons`], [`components::forms`], [`tokens`], [`utils`]) or
//! through the re-exports below.
//!
//! # Design
//! - `core` is DOM-free: the theme store talks to the browser only through the
//!   capabilities injected via [`ThemeEnvironment`].
//! - `web` (wasm32 only) supplies those capabilities from `localStorage`,
//!   `matchMedia`, and the document root.

pub mod components;
pub mod core;
pub mod error;
pub mod preset;
pub mod tokens;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use crate::components::editor::{EDITOR_VERSION, GUTTER_MANAGER, MARKDOWN_EDITOR};
pub use crate::components::forms::{FORMS_VERSION, SEARCH_INPUT};
pub use crate::components::gutter::{
    COLLAPSIBLE_SECTION, CONTENT_WITH_GUTTER, GUTTER_ITEM, GUTTER_VERSION, LEFT_GUTTER, MOBILE_TOC,
    TABLE_OF_CONTENTS,
};
pub use crate::components::icons::{ICON_LEGEND, ICONS, ICONS_VERSION};
pub use crate::components::{Category, ComponentDescriptor};
pub use crate::core::config::ThemeConfig;
pub use crate::core::env::{
    ColorSchemeSource, HeadlessRoot, MemoryStorage, PreferenceStorage, RootElement,
    StaticColorScheme, ThemeEnvironment,
};
pub use crate::core::store::{Subscription, ThemeStore};
pub use crate::core::theme::{ResolvedTheme, ThemePreference};
pub use crate::error::{ConfigError, EnvironmentError, StorageError, ThemeError};
pub use crate::preset::{DarkModeStrategy, TailwindPreset};
pub use crate::tokens::{BARK, COLORS, CREAM, ColorToken, GROVE, Palette, TOKENS_VERSION};
pub use crate::utils::{ClassValue, UTILS_VERSION, clsx, cn, merge_classes};

/// Version of the GroveUI package these modules mirror.
pub const GROVE_UI_VERSION: &str = "0.2.0";
