//! Vault and settings resolution shared by all commands

use std::path::{Path, PathBuf};

use note_calendar::constants as C;
use note_calendar::settings::{settings_path, Settings, SettingsStore};
use note_calendar::sources::{CompositeSource, StreakSource, WordCountSource};
use note_calendar::{Cli, FsVault, Result, SourceKind};

/// Everything a command needs: the vault, the settings and output mode
pub struct AppContext {
    pub vault: FsVault,
    pub settings: SettingsStore,
    pub json: bool,
}

impl AppContext {
    /// Open the vault and load settings for the parsed command line
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = vault_root(cli.vault.as_deref());
        let vault = FsVault::open(&root)?;

        let config = cli.config.as_deref().map(Path::new);
        let mut settings = match settings_path(config, vault.root()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading settings");
                Settings::load(&path)?
            }
            None => {
                tracing::debug!("No settings file found, using defaults");
                Settings::default()
            }
        };

        if let Some(words_per_dot) = cli.words_per_dot {
            settings.words_per_dot = words_per_dot;
        }
        if !settings.word_count_enabled() {
            tracing::warn!(words_per_dot = settings.words_per_dot, "Word count dots are disabled");
        }

        Ok(Self {
            vault,
            settings: SettingsStore::new(settings),
            json: cli.json,
        })
    }

    /// The metadata source selected on the command line
    pub fn source(&self, kind: SourceKind) -> CompositeSource<'_> {
        let composite = CompositeSource::new();
        match kind {
            SourceKind::Streak => composite.with(StreakSource::new(&self.vault, &self.settings)),
            SourceKind::WordCount => composite.with(WordCountSource::new(&self.vault, &self.settings)),
            SourceKind::All => composite
                .with(StreakSource::new(&self.vault, &self.settings))
                .with(WordCountSource::new(&self.vault, &self.settings)),
        }
    }
}

/// `--vault` (or `NOTE_CALENDAR_VAULT`, read by clap), else the current directory
fn vault_root(explicit: Option<&str>) -> PathBuf {
    match explicit.filter(|s| !s.is_empty()) {
        Some(path) => PathBuf::from(path),
        None => std::env::var_os(C::ENV_VAULT)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}
