//! Constants for note-calendar
//!
//! Default formats, dot limits, class names and file names shared by the
//! resolver, the metadata sources and the CLI.

// === Dots ===

/// Default number of words represented by one dot
pub const DEFAULT_WORDS_PER_DOT: i64 = 250;

/// Maximum number of dots rendered for one date
pub const MAX_DOTS: usize = 5;

/// Dot color understood by the calendar view
pub const DEFAULT_DOT_COLOR: &str = "default";

/// Class name carried by the dot that marks an existing but empty note
pub const EMPTY_NOTE_CLASS: &str = "empty-note";

// === Streak ===

/// Status class for a date that has a note
pub const HAS_NOTE_CLASS: &str = "has-note";

// === Date Format Strings (chrono strftime) ===

/// Daily note file name: 2024-03-15
pub const DEFAULT_DAILY_FORMAT: &str = "%Y-%m-%d";

/// Weekly note file name: 2024-W11 (ISO week-based year and week)
pub const DEFAULT_WEEK_FORMAT: &str = "%G-W%V";

/// Monthly note file name: 2024-03
pub const DEFAULT_MONTH_FORMAT: &str = "%Y-%m";

/// Per-day heading inside a monthly note: 15 March 2024 — Friday
pub const DEFAULT_MONTHLY_DAY_FORMAT: &str = "%d %B %Y — %A";

/// Date format accepted on the command line
pub const CLI_DATE_FORMAT: &str = "%Y-%m-%d";

// === Files ===

/// Default file extension for notes
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Settings file looked up at the vault root
pub const VAULT_SETTINGS_FILENAME: &str = ".note-calendar.yaml";

/// Directory under the user config dir holding settings.yaml
pub const CONFIG_DIR_NAME: &str = "note-calendar";

/// Settings file name inside the user config dir
pub const CONFIG_FILENAME: &str = "settings.yaml";

// === Environment Variables ===

/// Vault directory override
pub const ENV_VAULT: &str = "NOTE_CALENDAR_VAULT";

/// Settings file override
pub const ENV_CONFIG: &str = "NOTE_CALENDAR_CONFIG";

/// Log filter override
pub const ENV_LOG: &str = "NOTE_CALENDAR_LOG";
