use std::cell::RefCell;
use std::rc::Rc;

use grove_ui::{
    HeadlessRoot, MemoryStorage, PreferenceStorage, ResolvedTheme, StaticColorScheme,
    StorageError, TailwindPreset, ThemeConfig, ThemeEnvironment, ThemeError, ThemePreference,
    ThemeStore,
};

/// Storage that reads fine but rejects every write, like a full quota.
struct QuotaExceeded;

impl PreferenceStorage for QuotaExceeded {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(Some("light".to_string()))
    }

    fn store(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Operation {
            operation: "store",
            key: key.to_string(),
            detail: "QuotaExceededError".to_string(),
        })
    }
}

/// Storage whose reads throw, like a sandboxed frame.
struct Unreadable;

impl PreferenceStorage for Unreadable {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn store(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

fn browser_like(
    storage: MemoryStorage,
    scheme: StaticColorScheme,
    root: HeadlessRoot,
    config: ThemeConfig,
) -> ThemeStore {
    let env = ThemeEnvironment::detached()
        .with_storage(storage)
        .with_color_scheme(scheme)
        .with_root(root);
    ThemeStore::new(env, config)
}

#[test]
fn persisted_preference_survives_a_reload() -> anyhow::Result<()> {
    let storage = MemoryStorage::new();
    let first = browser_like(
        storage.clone(),
        StaticColorScheme::new(Some(false)),
        HeadlessRoot::new(),
        ThemeConfig::default(),
    );
    first.set(ThemePreference::Dark)?;
    drop(first);

    let root = HeadlessRoot::new();
    let reloaded = browser_like(
        storage,
        StaticColorScheme::new(Some(false)),
        root.clone(),
        ThemeConfig::default(),
    );
    assert_eq!(reloaded.preference(), ThemePreference::Dark);
    assert_eq!(reloaded.resolved(), ResolvedTheme::Dark);
    assert!(root.has_class("dark"));
    Ok(())
}

#[test]
fn system_preference_follows_color_scheme_changes() {
    let scheme = StaticColorScheme::new(Some(false));
    let root = HeadlessRoot::new();
    let store = browser_like(
        MemoryStorage::new(),
        scheme.clone(),
        root.clone(),
        ThemeConfig::default(),
    );
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |theme| sink.borrow_mut().push(theme));

    scheme.set(Some(true));
    assert_eq!(store.refresh_system(), ResolvedTheme::Dark);
    assert!(root.has_class("dark"));

    scheme.set(Some(true));
    store.refresh_system();
    scheme.set(Some(false));
    store.refresh_system();
    assert!(!root.has_class("dark"));

    assert_eq!(
        *seen.borrow(),
        vec![ResolvedTheme::Light, ResolvedTheme::Dark, ResolvedTheme::Light]
    );
}

#[test]
fn explicit_choice_ignores_system_changes() -> anyhow::Result<()> {
    let scheme = StaticColorScheme::new(Some(true));
    let store = browser_like(
        MemoryStorage::new(),
        scheme.clone(),
        HeadlessRoot::new(),
        ThemeConfig::default(),
    );
    store.set(ThemePreference::Light)?;
    scheme.set(Some(false));
    scheme.set(Some(true));
    assert_eq!(store.refresh_system(), ResolvedTheme::Light);
    Ok(())
}

#[test]
fn failed_write_keeps_the_in_memory_choice() {
    let root = HeadlessRoot::new();
    let env = ThemeEnvironment::detached()
        .with_storage(QuotaExceeded)
        .with_root(root.clone());
    let store = ThemeStore::new(env, ThemeConfig::default());
    assert_eq!(store.preference(), ThemePreference::Light);

    let err = store.set(ThemePreference::Dark).unwrap_err();
    assert!(matches!(
        err,
        ThemeError::Persist {
            preference: ThemePreference::Dark,
            source: StorageError::Operation {
                operation: "store",
                ..
            },
        }
    ));
    assert_eq!(store.preference(), ThemePreference::Dark);
    assert!(root.has_class("dark"));

    assert!(store.toggle().is_err());
    assert_eq!(store.resolved(), ResolvedTheme::Light);
}

#[test]
fn unreadable_storage_starts_at_system() {
    let env = ThemeEnvironment::detached()
        .with_storage(Unreadable)
        .with_color_scheme(StaticColorScheme::new(Some(true)));
    let store = ThemeStore::new(env, ThemeConfig::default());
    assert_eq!(store.preference(), ThemePreference::System);
    assert_eq!(store.resolved(), ResolvedTheme::Dark);
}

#[test]
fn custom_config_drives_key_class_and_attribute() -> anyhow::Result<()> {
    let config = ThemeConfig::from_json(
        r#"{"storage_key":"grove-theme","dark_class":"night","theme_attribute":"data-theme","system_fallback":"dark"}"#,
    )?;
    let storage = MemoryStorage::with_entry("theme", "light");
    let root = HeadlessRoot::new();
    let env = ThemeEnvironment::detached()
        .with_storage(storage.clone())
        .with_root(root.clone());
    let store = ThemeStore::new(env, config);

    // No color-scheme source: `system` resolves to the configured fallback.
    assert_eq!(store.preference(), ThemePreference::System);
    assert_eq!(store.resolved(), ResolvedTheme::Dark);
    assert!(root.has_class("night"));
    assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));

    assert_eq!(store.toggle()?, ResolvedTheme::Light);
    assert_eq!(storage.get("grove-theme").as_deref(), Some("light"));
    assert_eq!(storage.get("theme").as_deref(), Some("light"));
    assert!(!root.has_class("night"));
    assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));

    let mismatch = TailwindPreset::grove().validate_against(store.config());
    assert!(mismatch.is_err());
    Ok(())
}

#[test]
fn every_preference_round_trips_through_storage() -> anyhow::Result<()> {
    for preference in ThemePreference::ALL {
        let storage = MemoryStorage::new();
        let store = ThemeStore::new(
            ThemeEnvironment::detached().with_storage(storage.clone()),
            ThemeConfig::default(),
        );
        store.set(preference)?;
        assert_eq!(store.preference(), preference);
        assert_eq!(storage.get("theme").as_deref(), Some(preference.as_str()));
    }
    Ok(())
}
