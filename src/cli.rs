use clap::{Parser, Subcommand, ValueEnum};

/// note-calendar - Calendar annotations computed from your notes
///
/// Prints what a note calendar would show for a day, a week or a month:
/// a `has-note` streak class and up to five dots proportional to the word
/// count of the day's note.
///
/// ## Examples
///
/// ```bash
/// note-calendar day                        # Today
/// note-calendar day 2024-03-15             # A given day
/// note-calendar week 2024-03-15            # The ISO week containing that day
/// note-calendar month 2024-03 --json       # Every day of March as JSON
/// note-calendar --vault ~/notes day --source streak
/// ```
///
/// ## Notes Layout
///
/// - Daily: `{dailyNoteFolder}/{dailyNoteFormat}.md`
/// - Weekly: `{weeklyNoteFolder}/{weeklyNoteFormat}.md`
/// - Monthly: `{monthlyNoteFolder}/{monthlyNoteFormat}.md`, one heading per
///   day formatted with `monthlyDayFormat`; used when a day has no daily note
///
/// Formats are strftime strings. Folders may contain `{{date:<format>}}`.
///
/// ## Environment Variables
///
/// - `NOTE_CALENDAR_VAULT`: vault directory (default: current directory)
/// - `NOTE_CALENDAR_CONFIG`: settings file (YAML, or JSON by extension)
/// - `NOTE_CALENDAR_LOG`: log filter, e.g. `note_calendar=trace`
#[derive(Parser, Debug)]
#[command(name = "note-calendar")]
#[command(version)]
#[command(about = "Word-count dots and streak classes for a note calendar")]
pub struct Cli {
    /// Vault directory holding the notes
    #[arg(long, env = "NOTE_CALENDAR_VAULT", value_name = "PATH", global = true)]
    pub vault: Option<String>,

    /// Settings file (YAML or JSON)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Override wordsPerDot from the settings file (0 disables dots)
    #[arg(long, value_name = "N", global = true, allow_negative_numbers = true)]
    pub words_per_dot: Option<i64>,

    /// Output in JSON format
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level or filter directive
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Annotations for one day
    #[command(alias = "d")]
    Day {
        /// Date as YYYY-MM-DD (default: today)
        date: Option<String>,

        #[arg(short, long, value_enum, default_value_t = SourceKind::All)]
        source: SourceKind,
    },

    /// Annotations for the ISO week containing a day
    #[command(alias = "w")]
    Week {
        /// Any date in the week, YYYY-MM-DD (default: today)
        date: Option<String>,

        #[arg(short, long, value_enum, default_value_t = SourceKind::All)]
        source: SourceKind,
    },

    /// Annotations for every day of a month
    #[command(alias = "m")]
    Month {
        /// Month as YYYY-MM (default: current month)
        month: Option<String>,

        #[arg(short, long, value_enum, default_value_t = SourceKind::All)]
        source: SourceKind,
    },
}

/// Which metadata source to query
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Dots from word counts
    WordCount,
    /// has-note classes
    Streak,
    /// Both, merged
    All,
}
