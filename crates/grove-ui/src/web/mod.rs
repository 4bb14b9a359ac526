//! Browser capabilities for the theme store (wasm32 only).
//!
//! `localStorage` holds the preference as a bare string (`"dark"`, not the
//! JSON-encoded `"\"dark\""`), so the raw `Storage` API is used instead of a
//! serializing wrapper.

use gloo::events::EventListener;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{Element, MediaQueryList, Storage, Window};

use crate::core::config::ThemeConfig;
use crate::core::env::{ColorSchemeSource, PreferenceStorage, RootElement, ThemeEnvironment};
use crate::core::store::ThemeStore;
use crate::error::{ConfigError, EnvironmentError, StorageError};

fn js_detail(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Preference storage backed by `window.localStorage`.
pub struct LocalStorageBackend {
    storage: Storage,
}

impl LocalStorageBackend {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when storage is disabled or
    /// access throws (private browsing, sandboxed frames).
    pub fn from_window(window: &Window) -> Result<Self, StorageError> {
        window
            .local_storage()
            .ok()
            .flatten()
            .map(|storage| Self { storage })
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStorage for LocalStorageBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Operation {
                operation: "load",
                key: key.to_string(),
                detail: js_detail(&err),
            })
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Operation {
                operation: "store",
                key: key.to_string(),
                detail: js_detail(&err),
            })
    }
}

/// Color-scheme signal read from a `matchMedia` query.
pub struct MediaQueryScheme {
    query: Option<MediaQueryList>,
}

impl MediaQueryScheme {
    /// Evaluate `media_query` against the window; unsupported queries report `None`.
    #[must_use]
    pub fn new(window: &Window, media_query: &str) -> Self {
        Self {
            query: window.match_media(media_query).ok().flatten(),
        }
    }

    /// Underlying query list, for change subscriptions.
    #[must_use]
    pub const fn query(&self) -> Option<&MediaQueryList> {
        self.query.as_ref()
    }
}

impl ColorSchemeSource for MediaQueryScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.query.as_ref().map(MediaQueryList::matches)
    }
}

/// The document's root element (`<html>`).
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    /// Locate `document.documentElement`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::RootUnavailable`] when the window has no
    /// document or the document has no root element.
    pub fn from_window(window: &Window) -> Result<Self, EnvironmentError> {
        window
            .document()
            .and_then(|document| document.document_element())
            .map(|element| Self { element })
            .ok_or(EnvironmentError::RootUnavailable)
    }
}

impl RootElement for DocumentRoot {
    fn toggle_class(&self, class: &str, enabled: bool) -> Result<(), EnvironmentError> {
        self.element
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(|err| EnvironmentError::Dom {
                operation: "toggle_class",
                detail: js_detail(&err),
            })
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), EnvironmentError> {
        self.element
            .set_attribute(name, value)
            .map_err(|err| EnvironmentError::Dom {
                operation: "set_attribute",
                detail: js_detail(&err),
            })
    }
}

/// Keeps the store in sync with system color-scheme changes.
///
/// The listener is removed when the watcher is dropped.
pub struct SystemSchemeWatcher {
    _listener: EventListener,
}

impl SystemSchemeWatcher {
    /// Call [`ThemeStore::refresh_system`] on every `change` event of `query`.
    #[must_use]
    pub fn attach(query: &MediaQueryList, store: &ThemeStore) -> Self {
        let store = store.clone();
        let listener = EventListener::new(query, "change", move |_event| {
            let resolved = store.refresh_system();
            debug!(resolved = resolved.as_str(), "system color scheme changed");
        });
        Self {
            _listener: listener,
        }
    }
}

/// Capabilities of the running page, plus the media query for change events.
///
/// Outside a window context every capability is absent and the store runs
/// in memory only.
#[must_use]
pub fn browser_environment(config: &ThemeConfig) -> (ThemeEnvironment, Option<MediaQueryList>) {
    let Some(window) = web_sys::window() else {
        debug!("no window; theme store runs detached");
        return (ThemeEnvironment::detached(), None);
    };

    let mut env = ThemeEnvironment::detached();
    match LocalStorageBackend::from_window(&window) {
        Ok(storage) => env = env.with_storage(storage),
        Err(err) => warn!(error = %err, "theme preference will not persist"),
    }

    let scheme = MediaQueryScheme::new(&window, &config.media_query);
    let query = scheme.query().cloned();
    if query.is_none() {
        warn!(
            media_query = %config.media_query,
            fallback = config.system_fallback.as_str(),
            "media query unsupported; using fallback theme"
        );
    }
    env = env.with_color_scheme(scheme);

    match DocumentRoot::from_window(&window) {
        Ok(root) => env = env.with_root(root),
        Err(err) => warn!(error = %err, "theme class will not be applied"),
    }
    (env, query)
}

/// A store wired to the live page and its system-scheme listener.
pub struct BrowserTheme {
    store: ThemeStore,
    watcher: Option<SystemSchemeWatcher>,
}

impl BrowserTheme {
    /// Shared store handle.
    #[must_use]
    pub const fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Whether system color-scheme changes are being tracked.
    #[must_use]
    pub const fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }
}

/// Validate `config`, build a store against the page, and start tracking
/// system color-scheme changes.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when `config` fails validation.
pub fn install(config: ThemeConfig) -> Result<BrowserTheme, ConfigError> {
    let (env, query) = browser_environment(&config);
    let store = ThemeStore::try_new(env, config)?;
    let watcher = query
        .as_ref()
        .map(|query| SystemSchemeWatcher::attach(query, &store));
    Ok(BrowserTheme { store, watcher })
}
