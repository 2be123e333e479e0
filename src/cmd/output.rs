//! Human and JSON rendering of calendar metadata

use serde::Serialize;

use note_calendar::{CalendarDate, DayMetadata, DotStyle, Result};

/// Metadata for one date, as printed
#[derive(Debug, Serialize)]
pub struct DateEntry {
    pub date: String,
    #[serde(flatten)]
    pub metadata: DayMetadata,
}

impl DateEntry {
    pub fn new(date: &CalendarDate, metadata: DayMetadata) -> Self {
        Self {
            date: date.to_string(),
            metadata,
        }
    }
}

/// Print a JSON value on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line per date: `2024-03-15  ●●  has-note`
pub fn print_human(label: &str, entry: &DateEntry) {
    let dots = render_dots(&entry.metadata);
    let classes = entry
        .metadata
        .classes
        .as_ref()
        .map(|classes| classes.join(" "))
        .unwrap_or_default();
    let line = format!("{}  {:<5}  {}", label, dots, classes);
    println!("{}", line.trim_end());
}

fn render_dots(metadata: &DayMetadata) -> String {
    metadata
        .dots
        .iter()
        .flatten()
        .map(|dot| match dot.class_name {
            DotStyle::EmptyMarker => '○',
            DotStyle::Normal => '●',
        })
        .collect()
}
