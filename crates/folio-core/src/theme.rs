//! Theme preference persistence.
//!
//! One key in a small key-value file mirrors the applied mode; the two are
//! kept equal after every apply. Unset or unreadable storage means dark.

use std::path::PathBuf;

use tracing::debug;

use crate::config::AppConfig;

/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Key-value preference storage
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Preference storage backed by a TOML file
pub struct FilePrefStore {
    path: PathBuf,
}

impl FilePrefStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location, ~/.config/folio/theme.toml
    pub fn default_path() -> Self {
        Self::new(AppConfig::config_dir().join("theme.toml"))
    }

    fn read_table(&self) -> toml::Table {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| content.parse::<toml::Table>().ok())
            .unwrap_or_default()
    }
}

impl PrefStore for FilePrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_table()
            .get(key)
            .and_then(|v| v.as_str().map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut table = self.read_table();
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&self.path, table.to_string()) {
            debug!("failed to persist preference {key}: {e}");
        }
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemPrefStore {
    entries: std::collections::HashMap<String, String>,
}

impl PrefStore for MemPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Theme preference manager
pub struct ThemePrefs<S: PrefStore> {
    store: S,
    applied: ThemeMode,
}

impl<S: PrefStore> ThemePrefs<S> {
    /// Create and eagerly apply the stored preference, before first draw
    pub fn new(store: S) -> Self {
        let mut prefs = Self {
            store,
            applied: ThemeMode::Dark,
        };
        prefs.apply(prefs.stored());
        prefs
    }

    /// The persisted preference; dark when unset or unparseable
    pub fn stored(&self) -> ThemeMode {
        self.store
            .get(THEME_KEY)
            .and_then(|s| ThemeMode::parse(&s))
            .unwrap_or_default()
    }

    /// The currently applied mode
    pub fn applied(&self) -> ThemeMode {
        self.applied
    }

    /// Apply a mode and persist it
    pub fn apply(&mut self, mode: ThemeMode) {
        self.applied = mode;
        self.store.set(THEME_KEY, mode.as_str());
    }

    /// Flip the applied mode (not the stored one) and persist the result
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.applied.flip();
        self.apply(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_defaults_to_dark() {
        let prefs = ThemePrefs::new(MemPrefStore::default());
        assert_eq!(prefs.stored(), ThemeMode::Dark);
        assert_eq!(prefs.applied(), ThemeMode::Dark);
    }

    #[test]
    fn test_stored_value_round_trips() {
        let mut store = MemPrefStore::default();
        store.set(THEME_KEY, "light");
        let prefs = ThemePrefs::new(store);
        assert_eq!(prefs.stored(), ThemeMode::Light);
        assert_eq!(prefs.applied(), ThemeMode::Light);
    }

    #[test]
    fn test_garbage_value_defaults_to_dark() {
        let mut store = MemPrefStore::default();
        store.set(THEME_KEY, "solarized");
        let prefs = ThemePrefs::new(store);
        assert_eq!(prefs.stored(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let mut prefs = ThemePrefs::new(MemPrefStore::default());
        assert_eq!(prefs.toggle(), ThemeMode::Light);
        assert_eq!(prefs.applied(), ThemeMode::Light);
        assert_eq!(prefs.stored(), ThemeMode::Light);
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut prefs = ThemePrefs::new(MemPrefStore::default());
        let before = prefs.applied();
        prefs.toggle();
        prefs.toggle();
        assert_eq!(prefs.applied(), before);
        assert_eq!(prefs.stored(), before);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        let mut prefs = ThemePrefs::new(FilePrefStore::new(path.clone()));
        prefs.toggle();
        assert_eq!(prefs.applied(), ThemeMode::Light);

        let reloaded = ThemePrefs::new(FilePrefStore::new(path));
        assert_eq!(reloaded.applied(), ThemeMode::Light);
    }
}
