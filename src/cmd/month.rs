use serde::Serialize;

use note_calendar::constants as C;
use note_calendar::{CalendarDate, MetadataSource, Result, SourceKind};

use super::context::AppContext;
use super::output::{self, DateEntry};

#[derive(Serialize)]
struct MonthReport {
    month: String,
    days: Vec<DateEntry>,
    weeks: Vec<DateEntry>,
}

pub fn run(ctx: &AppContext, month: Option<String>, source: SourceKind) -> Result<()> {
    let first = match month.as_deref() {
        Some(month) => CalendarDate::parse_month(month)?,
        None => CalendarDate::today(),
    };
    let source = ctx.source(source);
    let days = first.month_days();

    let mut week_starts: Vec<CalendarDate> = days.iter().map(CalendarDate::week_start).collect();
    week_starts.dedup();

    let mut report = MonthReport {
        month: first.format(C::DEFAULT_MONTH_FORMAT).unwrap_or_default(),
        days: Vec::with_capacity(days.len()),
        weeks: Vec::with_capacity(week_starts.len()),
    };
    for day in &days {
        report.days.push(DateEntry::new(day, source.daily_metadata(day)?));
    }
    for start in &week_starts {
        report.weeks.push(DateEntry::new(start, source.weekly_metadata(start)?));
    }

    if ctx.json {
        return output::print_json(&report);
    }

    println!("{}", report.month);
    for entry in &report.days {
        output::print_human(&entry.date, entry);
    }
    println!();
    for (start, entry) in week_starts.iter().zip(&report.weeks) {
        let label = start
            .format(C::DEFAULT_WEEK_FORMAT)
            .unwrap_or_else(|| entry.date.clone());
        output::print_human(&label, entry);
    }
    Ok(())
}
