use note_calendar::constants as C;
use note_calendar::{MetadataSource, Result, SourceKind};

use super::context::AppContext;
use super::output::{self, DateEntry};

/// Weekly metadata is keyed by the Monday of the ISO week
pub fn run(ctx: &AppContext, date: Option<String>, source: SourceKind) -> Result<()> {
    let start = super::parse_date(date.as_deref())?.week_start();
    let metadata = ctx.source(source).weekly_metadata(&start)?;
    let entry = DateEntry::new(&start, metadata);

    if ctx.json {
        output::print_json(&entry)
    } else {
        let label = start
            .format(C::DEFAULT_WEEK_FORMAT)
            .unwrap_or_else(|| entry.date.clone());
        output::print_human(&label, &entry);
        Ok(())
    }
}
