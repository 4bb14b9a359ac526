//! Environment capabilities injected into the theme store.
//!
//! # Design
//! - Each capability is a small trait so the store never touches browser globals.
//! - A missing capability means "no browser context": the store skips that side
//!   effect and keeps working in memory.
//! - The headless implementations here serve native hosts, server-side
//!   rendering, and tests. Browser implementations live in `crate::web`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

use crate::error::{EnvironmentError, StorageError};

/// Durable key-value storage for the persisted preference.
pub trait PreferenceStorage {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Source of the operating system color-scheme preference.
pub trait ColorSchemeSource {
    /// `Some(true)` when the system prefers dark, `None` when unsupported.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Mutable presentation state on the document root element.
pub trait RootElement {
    /// Add (`enabled = true`) or remove a class.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] when the root cannot be mutated.
    fn toggle_class(&self, class: &str, enabled: bool) -> Result<(), EnvironmentError>;

    /// Set an attribute value.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] when the root cannot be mutated.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), EnvironmentError>;
}

/// Capabilities available to a theme store.
#[derive(Default)]
pub struct ThemeEnvironment {
    pub(crate) storage: Option<Box<dyn PreferenceStorage>>,
    pub(crate) color_scheme: Option<Box<dyn ColorSchemeSource>>,
    pub(crate) root: Option<Box<dyn RootElement>>,
}

impl ThemeEnvironment {
    /// Environment with no capabilities, as when running outside a browser.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Attach a storage backend.
    #[must_use]
    pub fn with_storage(mut self, storage: impl PreferenceStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Attach a color-scheme source.
    #[must_use]
    pub fn with_color_scheme(mut self, source: impl ColorSchemeSource + 'static) -> Self {
        self.color_scheme = Some(Box::new(source));
        self
    }

    /// Attach a document root mutator.
    #[must_use]
    pub fn with_root(mut self, root: impl RootElement + 'static) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    /// Whether a storage backend is attached.
    #[must_use]
    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Whether a document root is attached.
    #[must_use]
    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    pub(crate) fn prefers_dark(&self) -> Option<bool> {
        self.color_scheme
            .as_ref()
            .and_then(|source| source.prefers_dark())
    }
}

impl fmt::Debug for ThemeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeEnvironment")
            .field("storage", &self.storage.is_some())
            .field("color_scheme", &self.color_scheme.is_some())
            .field("root", &self.root.is_some())
            .finish()
    }
}

/// In-memory storage; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Current value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Color-scheme signal set by the host; clones share the same value.
///
/// Native shells that learn the OS appearance from their own event loop
/// update it with [`StaticColorScheme::set`] and then call
/// [`ThemeStore::refresh_system`](crate::core::store::ThemeStore::refresh_system).
#[derive(Clone, Debug, Default)]
pub struct StaticColorScheme {
    prefers_dark: Rc<Cell<Option<bool>>>,
}

impl StaticColorScheme {
    /// Signal with an initial value (`None` = unsupported).
    #[must_use]
    pub fn new(prefers_dark: Option<bool>) -> Self {
        Self {
            prefers_dark: Rc::new(Cell::new(prefers_dark)),
        }
    }

    /// Replace the signal value.
    pub fn set(&self, prefers_dark: Option<bool>) {
        self.prefers_dark.set(prefers_dark);
    }
}

impl ColorSchemeSource for StaticColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark.get()
    }
}

#[derive(Debug, Default)]
struct RootState {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    writes: usize,
}

/// Document root model for server-side rendering; clones share state.
#[derive(Clone, Debug, Default)]
pub struct HeadlessRoot {
    state: Rc<RefCell<RootState>>,
}

impl HeadlessRoot {
    /// Root with no classes or attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `class` is currently present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    /// Space-joined class list, ready for a `class` attribute.
    #[must_use]
    pub fn class_attribute(&self) -> String {
        self.state
            .borrow()
            .classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Current value of an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    /// Number of mutations applied so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl RootElement for HeadlessRoot {
    fn toggle_class(&self, class: &str, enabled: bool) -> Result<(), EnvironmentError> {
        let mut state = self.state.borrow_mut();
        if enabled {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
        state.writes += 1;
        Ok(())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), EnvironmentError> {
        let mut state = self.state.borrow_mut();
        state
            .attributes
            .insert(name.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }
}
