//! Theme preference store.
//!
//! # Design
//! - One explicit object owns the preference; environment access goes through
//!   the injected [`ThemeEnvironment`].
//! - The resolved theme is derived at read time. The store also remembers the
//!   last value it applied so that root mutations and notifications fire only
//!   on real changes.
//! - State borrows are released before any callback runs; observers may call
//!   back into the store.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::config::ThemeConfig;
use crate::core::env::ThemeEnvironment;
use crate::core::observers::ObserverList;
use crate::core::theme::{ResolvedTheme, ThemePreference};
use crate::error::{ConfigError, ThemeError};

/// Handle returned by the subscribe operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription {
    channel: Channel,
    id: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Channel {
    Resolved,
    Preference,
}

#[derive(Clone, Copy, Debug)]
struct StoreState {
    preference: ThemePreference,
    applied: ResolvedTheme,
}

struct StoreInner {
    config: ThemeConfig,
    env: ThemeEnvironment,
    state: RefCell<StoreState>,
    resolved_observers: ObserverList<ResolvedTheme>,
    preference_observers: ObserverList<ThemePreference>,
}

/// Shared handle to the theme preference store.
///
/// Clones refer to the same store. The handle is single-threaded (`!Send`),
/// matching the browser main thread it models.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<StoreInner>,
}

impl ThemeStore {
    /// Build a store, load the persisted preference, and apply the resolved
    /// theme to the document root.
    #[must_use]
    pub fn new(env: ThemeEnvironment, config: ThemeConfig) -> Self {
        let preference = load_preference(&env, &config);
        let applied = preference.resolve(env.prefers_dark(), config.system_fallback);
        let store = Self {
            inner: Rc::new(StoreInner {
                config,
                env,
                state: RefCell::new(StoreState {
                    preference,
                    applied,
                }),
                resolved_observers: ObserverList::new(),
                preference_observers: ObserverList::new(),
            }),
        };
        debug!(
            preference = preference.as_str(),
            resolved = applied.as_str(),
            "theme store initialised"
        );
        store.apply_to_root(applied);
        store
    }

    /// Validate `config`, then build the store as [`ThemeStore::new`] does.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first invalid field.
    pub fn try_new(env: ThemeEnvironment, config: ThemeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(env, config))
    }

    /// Store with default configuration and no browser capabilities.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(ThemeEnvironment::detached(), ThemeConfig::default())
    }

    /// Configuration the store was built with.
    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.inner.config
    }

    /// Current preference.
    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.inner.state.borrow().preference
    }

    /// Resolved theme, computed from the preference and the current system signal.
    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        self.resolve(self.preference())
    }

    /// Update the preference and persist it.
    ///
    /// The in-memory value changes first and the write follows; observers are
    /// notified afterwards, even when the write failed.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Persist`] when storage is attached but rejects
    /// the write. Without attached storage the write is skipped.
    pub fn set(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        let previous = {
            let mut state = self.inner.state.borrow_mut();
            std::mem::replace(&mut state.preference, preference)
        };
        let persisted = self.persist(preference);
        if previous != preference {
            debug!(
                from = previous.as_str(),
                to = preference.as_str(),
                "theme preference changed"
            );
            self.inner.preference_observers.notify(preference);
        }
        self.sync();
        persisted
    }

    /// Flip the resolved theme and store it as an explicit preference.
    ///
    /// Never yields `system`; returns the new resolved theme.
    ///
    /// # Errors
    ///
    /// Propagates [`ThemeError::Persist`] from [`ThemeStore::set`].
    pub fn toggle(&self) -> Result<ResolvedTheme, ThemeError> {
        let next = self.resolved().opposite();
        self.set(ThemePreference::from(next))?;
        Ok(next)
    }

    /// Re-evaluate after the system color scheme changed.
    ///
    /// Returns the resolved theme after the refresh.
    pub fn refresh_system(&self) -> ResolvedTheme {
        self.sync()
    }

    /// Observe the resolved theme.
    ///
    /// Pending system changes are applied first, so the callback runs
    /// immediately with the same value [`ThemeStore::resolved`] reports, and
    /// again after every change.
    pub fn subscribe(&self, callback: impl Fn(ResolvedTheme) + 'static) -> Subscription {
        self.sync();
        let id = self.inner.resolved_observers.subscribe(callback);
        if let Some(callback) = self.inner.resolved_observers.callback(id) {
            callback(self.applied());
        }
        Subscription {
            channel: Channel::Resolved,
            id,
        }
    }

    /// Observe the preference.
    ///
    /// The callback runs immediately with the current value and again after
    /// every change.
    pub fn subscribe_preference(
        &self,
        callback: impl Fn(ThemePreference) + 'static,
    ) -> Subscription {
        let id = self.inner.preference_observers.subscribe(callback);
        if let Some(callback) = self.inner.preference_observers.callback(id) {
            callback(self.preference());
        }
        Subscription {
            channel: Channel::Preference,
            id,
        }
    }

    /// Remove a subscription. Returns `false` when it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        match subscription.channel {
            Channel::Resolved => self.inner.resolved_observers.unsubscribe(subscription.id),
            Channel::Preference => self.inner.preference_observers.unsubscribe(subscription.id),
        }
    }

    /// Number of live subscriptions across both channels.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.resolved_observers.len() + self.inner.preference_observers.len()
    }

    fn applied(&self) -> ResolvedTheme {
        self.inner.state.borrow().applied
    }

    fn resolve(&self, preference: ThemePreference) -> ResolvedTheme {
        preference.resolve(
            self.inner.env.prefers_dark(),
            self.inner.config.system_fallback,
        )
    }

    fn sync(&self) -> ResolvedTheme {
        let resolved = self.resolved();
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            let changed = state.applied != resolved;
            state.applied = resolved;
            changed
        };
        if changed {
            debug!(resolved = resolved.as_str(), "resolved theme changed");
            self.apply_to_root(resolved);
            self.inner.resolved_observers.notify(resolved);
        }
        resolved
    }

    fn persist(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        let Some(storage) = self.inner.env.storage.as_ref() else {
            return Ok(());
        };
        let key = self.inner.config.storage_key.as_str();
        storage.store(key, preference.as_str()).map_err(|source| {
            warn!(key, error = %source, "failed to persist theme preference");
            ThemeError::Persist { preference, source }
        })
    }

    fn apply_to_root(&self, theme: ResolvedTheme) {
        let Some(root) = self.inner.env.root.as_ref() else {
            return;
        };
        let config = &self.inner.config;
        if let Err(err) = root.toggle_class(&config.dark_class, theme.is_dark()) {
            warn!(class = %config.dark_class, error = %err, "failed to toggle theme class");
        }
        if let Some(attribute) = &config.theme_attribute
            && let Err(err) = root.set_attribute(attribute, theme.as_str())
        {
            warn!(attribute = %attribute, error = %err, "failed to set theme attribute");
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = *self.inner.state.borrow();
        f.debug_struct("ThemeStore")
            .field("preference", &state.preference)
            .field("applied", &state.applied)
            .field("env", &self.inner.env)
            .finish_non_exhaustive()
    }
}

fn load_preference(env: &ThemeEnvironment, config: &ThemeConfig) -> ThemePreference {
    let Some(storage) = env.storage.as_ref() else {
        return ThemePreference::System;
    };
    let key = config.storage_key.as_str();
    match storage.load(key) {
        Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
            warn!(key, value = %value, "ignoring unrecognised stored theme preference");
            ThemePreference::System
        }),
        Ok(None) => ThemePreference::System,
        Err(err) => {
            warn!(key, error = %err, "failed to read stored theme preference");
            ThemePreference::System
        }
    }
}
