pub mod cli;
pub mod constants;
pub mod date;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod metadata;
pub mod normalize;
pub mod quantize;
pub mod resolver;
pub mod settings;
pub mod sources;
pub mod vault;

pub use cli::{Cli, Command, SourceKind};
pub use date::{CalendarDate, Granularity};
pub use error::{CalendarError, Result};
pub use markdown::HeadingEntry;
pub use metadata::{DayMetadata, DotSpec, DotStyle};
pub use normalize::{count_words, normalize, word_count};
pub use quantize::{quantize, Quantized};
pub use resolver::{MonthlySection, NoteResolver, SectionBounds};
pub use settings::{Settings, SettingsStore};
pub use sources::{CompositeSource, MetadataSource, StreakSource, WordCountSource};
pub use vault::{FsVault, MemoryVault, NoteHandle, Vault};
