//! Calendar settings and the shared settings store
//!
//! Settings are read as an immutable snapshot at the start of every
//! metadata call. The store swaps in a new snapshot on update and notifies
//! subscribers, so a long-running host can live-reload its settings file.
//!
//! Resolution priority for the settings file:
//! 1. Explicit path (`--config`)
//! 2. `NOTE_CALENDAR_CONFIG` environment variable
//! 3. `.note-calendar.yaml` at the vault root
//! 4. `<config dir>/note-calendar/settings.yaml`
//! 5. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use serde::{Deserialize, Serialize};

use crate::constants as C;
use crate::error::{CalendarError, Result};

/// Settings consumed by the resolver and the word-count source
///
/// Keys are camelCase and share their names with the calendar plugin's
/// `data.json`. Formats are strftime strings; moment-style formats such as
/// `YYYY-MM` have no `%` specifier and are logged as a warning on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Words per dot; zero or negative disables word counting
    pub words_per_dot: i64,
    pub daily_note_folder: String,
    pub daily_note_format: String,
    pub weekly_note_folder: String,
    pub weekly_note_format: String,
    /// Folder template, may contain `{{date:<format>}}` placeholders
    pub monthly_note_folder: String,
    pub monthly_note_format: String,
    /// Heading text of a day's section inside a monthly note
    pub monthly_day_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_per_dot: C::DEFAULT_WORDS_PER_DOT,
            daily_note_folder: String::new(),
            daily_note_format: C::DEFAULT_DAILY_FORMAT.to_string(),
            weekly_note_folder: String::new(),
            weekly_note_format: C::DEFAULT_WEEK_FORMAT.to_string(),
            monthly_note_folder: String::new(),
            monthly_note_format: C::DEFAULT_MONTH_FORMAT.to_string(),
            monthly_day_format: C::DEFAULT_MONTHLY_DAY_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML or JSON file (chosen by extension)
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CalendarError::io(path, e))?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let settings: Self = if is_json {
            serde_json::from_str(&content).map_err(|e| CalendarError::settings(path, e))?
        } else if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| CalendarError::settings(path, e))?
        };

        for key in settings.literal_formats() {
            tracing::warn!(
                path = %path.display(),
                key,
                "Date format has no strftime specifier; every date maps to the same name"
            );
        }
        Ok(settings)
    }

    /// Keys of the date formats that contain no `%` specifier
    pub fn literal_formats(&self) -> Vec<&'static str> {
        [
            ("dailyNoteFormat", &self.daily_note_format),
            ("weeklyNoteFormat", &self.weekly_note_format),
            ("monthlyNoteFormat", &self.monthly_note_format),
            ("monthlyDayFormat", &self.monthly_day_format),
        ]
        .into_iter()
        .filter(|(_, format)| !format.contains('%'))
        .map(|(key, _)| key)
        .collect()
    }

    /// Whether word counting is switched on
    pub fn word_count_enabled(&self) -> bool {
        self.words_per_dot > 0
    }
}

/// Find the settings file to use, following the documented priority
pub fn settings_path(explicit: Option<&Path>, vault_root: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(C::ENV_CONFIG).filter(|s| !s.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let in_vault = vault_root.join(C::VAULT_SETTINGS_FILENAME);
    if in_vault.is_file() {
        return Some(in_vault);
    }

    dirs::config_dir()
        .map(|dir| dir.join(C::CONFIG_DIR_NAME).join(C::CONFIG_FILENAME))
        .filter(|path| path.is_file())
}

type Listener = Arc<dyn Fn(&Settings) + Send + Sync>;

/// Shared, reactive holder of the current settings snapshot
pub struct SettingsStore {
    current: RwLock<Arc<Settings>>,
    listeners: Mutex<Vec<Listener>>,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            current: RwLock::new(Arc::new(settings)),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Current settings; later updates do not affect the returned snapshot
    pub fn snapshot(&self) -> Arc<Settings> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Replace the settings and notify subscribers
    pub fn replace(&self, settings: Settings) {
        let snapshot = Arc::new(settings);
        {
            let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
            *guard = Arc::clone(&snapshot);
        }
        tracing::debug!(words_per_dot = snapshot.words_per_dot, "Settings updated");

        // Listeners run unlocked so they may update the store themselves
        let listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner()).clone();
        for listener in &listeners {
            listener(&snapshot);
        }
    }

    /// Derive new settings from the current ones
    pub fn update(&self, change: impl FnOnce(&mut Settings)) {
        let mut next = (*self.snapshot()).clone();
        change(&mut next);
        self.replace(next);
    }

    /// Re-read a settings file into the store
    pub fn reload(&self, path: &Path) -> Result<()> {
        let settings = Settings::load(path)?;
        self.replace(settings);
        Ok(())
    }

    /// Register a callback run after every update
    pub fn subscribe(&self, listener: impl Fn(&Settings) + Send + Sync + 'static) {
        let mut listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        listeners.push(Arc::new(listener));
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("current", &self.snapshot())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.words_per_dot, 250);
        assert_eq!(settings.monthly_note_format, "%Y-%m");
        assert!(settings.word_count_enabled());
    }

    #[test]
    fn test_load_yaml_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "wordsPerDot: 100\nmonthlyNoteFolder: \"Journal/{{date:%Y}}\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.words_per_dot, 100);
        assert_eq!(settings.monthly_note_folder, "Journal/{{date:%Y}}");
        assert_eq!(settings.daily_note_format, C::DEFAULT_DAILY_FORMAT);
    }

    #[test]
    fn test_load_json_plugin_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"wordsPerDot": 0, "shouldConfirmBeforeCreate": true}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.words_per_dot, 0);
        assert!(!settings.word_count_enabled());
    }

    #[test]
    fn test_load_empty_yaml_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "wordsPerDot: [1, 2]\n").unwrap();
        assert!(matches!(Settings::load(&path), Err(CalendarError::Settings { .. })));
        assert!(matches!(
            Settings::load(&dir.path().join("missing.yaml")),
            Err(CalendarError::Io { .. })
        ));
    }

    #[test]
    fn test_settings_path_explicit_and_vault() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("custom.yaml");
        assert_eq!(settings_path(Some(&explicit), dir.path()), Some(explicit));

        let in_vault = dir.path().join(C::VAULT_SETTINGS_FILENAME);
        fs::write(&in_vault, "wordsPerDot: 10\n").unwrap();
        if std::env::var_os(C::ENV_CONFIG).is_none() {
            assert_eq!(settings_path(None, dir.path()), Some(in_vault));
        }
    }

    #[test]
    fn test_store_snapshot_is_isolated() {
        let store = SettingsStore::default();
        let before = store.snapshot();
        store.update(|s| s.words_per_dot = 10);
        assert_eq!(before.words_per_dot, 250);
        assert_eq!(store.snapshot().words_per_dot, 10);
    }

    #[test]
    fn test_store_notifies_subscribers() {
        let store = SettingsStore::default();
        let seen = Arc::new(AtomicI64::new(0));
        let seen_clone = Arc::clone(&seen);
        store.subscribe(move |s| seen_clone.store(s.words_per_dot, Ordering::SeqCst));

        store.update(|s| s.words_per_dot = 42);
        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_listener_can_update_store() {
        let store = Arc::new(SettingsStore::default());
        let weak = Arc::downgrade(&store);
        store.subscribe(move |s| {
            if s.words_per_dot < 0 {
                if let Some(store) = weak.upgrade() {
                    store.update(|s| s.words_per_dot = 0);
                }
            }
        });

        let (tx, rx) = std::sync::mpsc::channel();
        let worker = Arc::clone(&store);
        std::thread::spawn(move || {
            worker.update(|s| s.words_per_dot = -5);
            tx.send(()).unwrap();
        });

        rx.recv_timeout(std::time::Duration::from_secs(3))
            .expect("update from a listener should not block");
        assert_eq!(store.snapshot().words_per_dot, 0);
    }

    #[test]
    fn test_listener_can_subscribe() {
        let store = Arc::new(SettingsStore::default());
        let weak = Arc::downgrade(&store);
        let seen = Arc::new(AtomicI64::new(0));
        let seen_clone = Arc::clone(&seen);
        store.subscribe(move |_| {
            if let Some(store) = weak.upgrade() {
                let seen = Arc::clone(&seen_clone);
                store.subscribe(move |s| seen.store(s.words_per_dot, Ordering::SeqCst));
            }
        });

        store.update(|s| s.words_per_dot = 3);
        store.update(|s| s.words_per_dot = 9);
        assert_eq!(seen.load(Ordering::SeqCst), 9);
    }

    #[test]
    fn test_literal_formats() {
        assert!(Settings::default().literal_formats().is_empty());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"{"monthlyNoteFormat": "YYYY-MM", "monthlyDayFormat": "DD MMMM YYYY"}"#,
        )
        .unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.literal_formats(), vec!["monthlyNoteFormat", "monthlyDayFormat"]);
    }

    #[test]
    fn test_store_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "wordsPerDot: 7\n").unwrap();

        let store = SettingsStore::default();
        store.reload(&path).unwrap();
        assert_eq!(store.snapshot().words_per_dot, 7);
    }
}
