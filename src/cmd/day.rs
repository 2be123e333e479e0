use note_calendar::{MetadataSource, Result, SourceKind};

use super::context::AppContext;
use super::output::{self, DateEntry};

pub fn run(ctx: &AppContext, date: Option<String>, source: SourceKind) -> Result<()> {
    let date = super::parse_date(date.as_deref())?;
    let metadata = ctx.source(source).daily_metadata(&date)?;
    let entry = DateEntry::new(&date, metadata);

    if ctx.json {
        output::print_json(&entry)
    } else {
        output::print_human(&entry.date, &entry);
        Ok(())
    }
}
