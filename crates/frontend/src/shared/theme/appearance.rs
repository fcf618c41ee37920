//! Appearance preference (light / dark / follow the OS).
//!
//! The store does not touch the browser itself: persistence and the
//! colour-scheme query are injected, so tests run against in-memory fakes.

pub const APPEARANCE_STORAGE_KEY: &str = "appearance";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Appearance {
    Light,
    Dark,
    #[default]
    System,
}

impl Appearance {
    /// Returns the name used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
            Appearance::System => "system",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Appearance::Light => "Terang",
            Appearance::Dark => "Gelap",
            Appearance::System => "Ikuti sistem",
        }
    }

    /// Parse from storage. Unknown values fall back to `System`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Appearance::Light,
            "dark" => Appearance::Dark,
            _ => Appearance::System,
        }
    }

    pub fn all() -> [Appearance; 3] {
        [Appearance::Light, Appearance::Dark, Appearance::System]
    }

    /// Theme to paint given the current OS colour scheme.
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Appearance::Light => ResolvedTheme::Light,
            Appearance::Dark => ResolvedTheme::Dark,
            Appearance::System if prefers_dark => ResolvedTheme::Dark,
            Appearance::System => ResolvedTheme::Light,
        }
    }
}

/// Theme actually painted after `System` is resolved.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }
}

/// Key-value persistence for the preference.
pub trait AppearanceStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
}

/// Answers `prefers-color-scheme: dark`.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AppearanceStore<S, M> {
    storage: S,
    scheme: M,
}

impl<S: AppearanceStorage, M: ColorSchemeQuery> AppearanceStore<S, M> {
    pub fn new(storage: S, scheme: M) -> Self {
        Self { storage, scheme }
    }

    pub fn load(&self) -> Appearance {
        self.storage
            .load(APPEARANCE_STORAGE_KEY)
            .map(|s| Appearance::from_str(&s))
            .unwrap_or_default()
    }

    pub fn save(&self, appearance: Appearance) {
        self.storage.store(APPEARANCE_STORAGE_KEY, appearance.as_str());
    }

    pub fn prefers_dark(&self) -> bool {
        self.scheme.prefers_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage(RefCell<HashMap<String, String>>);

    impl AppearanceStorage for &MemoryStorage {
        fn load(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn store(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    struct FakeScheme(Cell<bool>);

    impl ColorSchemeQuery for &FakeScheme {
        fn prefers_dark(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_default_is_system() {
        let storage = MemoryStorage::default();
        let scheme = FakeScheme(Cell::new(false));
        let store = AppearanceStore::new(&storage, &scheme);
        assert_eq!(store.load(), Appearance::System);
    }

    #[test]
    fn test_save_and_load_through_storage() {
        let storage = MemoryStorage::default();
        let scheme = FakeScheme(Cell::new(false));
        let store = AppearanceStore::new(&storage, &scheme);

        store.save(Appearance::Dark);
        assert_eq!(
            storage.0.borrow().get(APPEARANCE_STORAGE_KEY).map(String::as_str),
            Some("dark")
        );
        assert_eq!(store.load(), Appearance::Dark);
    }

    #[test]
    fn test_unknown_stored_value_falls_back() {
        let storage = MemoryStorage::default();
        storage
            .0
            .borrow_mut()
            .insert(APPEARANCE_STORAGE_KEY.to_string(), "forest".to_string());
        let scheme = FakeScheme(Cell::new(false));
        let store = AppearanceStore::new(&storage, &scheme);
        assert_eq!(store.load(), Appearance::System);
    }

    #[test]
    fn test_system_follows_color_scheme() {
        let scheme = FakeScheme(Cell::new(false));
        let storage = MemoryStorage::default();
        let store = AppearanceStore::new(&storage, &scheme);

        let before = Appearance::System.resolve(store.prefers_dark());
        scheme.0.set(true);
        let after = Appearance::System.resolve(store.prefers_dark());
        assert_eq!(before, ResolvedTheme::Light);
        assert_eq!(after, ResolvedTheme::Dark);
        assert!(!Appearance::Light.resolve(true).is_dark());
        assert!(Appearance::Dark.resolve(false).is_dark());
    }
}
