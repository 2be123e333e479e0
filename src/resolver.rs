//! Note resolution module
//!
//! Maps a calendar date to the note that represents it.
//!
//! Resolution rules:
//! 1. Day → `{dailyNoteFolder}/{date:dailyNoteFormat}.md`
//! 2. Week → `{weeklyNoteFolder}/{date:weeklyNoteFormat}.md`
//! 3. Month → `{monthlyNoteFolder}/{date:monthlyNoteFormat}.md`, and inside it
//!    the section under the heading `{date:monthlyDayFormat}`
//!
//! Folder settings may contain `{{date:<format>}}` placeholders. A missing
//! note, heading or section is reported as `None`, never as an error.

use crate::constants as C;
use crate::date::{expand_date_template, CalendarDate, Granularity};
use crate::error::Result;
use crate::markdown::{self, HeadingEntry};
use crate::settings::Settings;
use crate::vault::{NoteHandle, Vault};

/// Half-open line range `[start, end)` of a section's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub start: usize,
    pub end: usize,
}

impl SectionBounds {
    /// Bounds of the section under `outline[index]`
    ///
    /// The body starts on the line after the heading and runs up to the next
    /// heading in outline order, or to the end of the document. Both ends are
    /// clamped to `line_count`.
    pub fn from_outline(outline: &[HeadingEntry], index: usize, line_count: usize) -> Self {
        let start = outline
            .get(index)
            .map(|heading| heading.line + 1)
            .unwrap_or(line_count)
            .min(line_count);
        let end = outline
            .get(index + 1)
            .map(|next| next.line)
            .unwrap_or(line_count)
            .clamp(start, line_count);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The lines of `text` inside the bounds, joined with `\n`
    pub fn slice(&self, text: &str) -> String {
        text.split('\n')
            .skip(self.start)
            .take(self.len())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A day's section inside a monthly note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySection {
    pub note: NoteHandle,
    pub heading: HeadingEntry,
    pub bounds: SectionBounds,
    text: String,
}

impl MonthlySection {
    /// Text of the section body, as read during resolution
    pub fn content(&self) -> String {
        self.bounds.slice(&self.text)
    }
}

/// Resolves dates to notes against one settings snapshot
pub struct NoteResolver<'a, V: Vault + ?Sized> {
    vault: &'a V,
    settings: &'a Settings,
}

impl<'a, V: Vault + ?Sized> NoteResolver<'a, V> {
    pub fn new(vault: &'a V, settings: &'a Settings) -> Self {
        Self { vault, settings }
    }

    /// Vault path of the note for `date` at `granularity`
    ///
    /// `None` when the file name format cannot be applied to a date.
    pub fn note_path(&self, date: &CalendarDate, granularity: Granularity) -> Option<String> {
        let s = self.settings;
        let (folder, format) = match granularity {
            Granularity::Day => (&s.daily_note_folder, &s.daily_note_format),
            Granularity::Week => (&s.weekly_note_folder, &s.weekly_note_format),
            Granularity::Month => (&s.monthly_note_folder, &s.monthly_note_format),
        };
        let name = date.format(format).filter(|name| !name.is_empty())?;
        Some(join_note_path(&expand_date_template(folder, date), &name))
    }

    /// Look up the note for `date` at `granularity`
    pub fn resolve(&self, date: &CalendarDate, granularity: Granularity) -> Option<NoteHandle> {
        let path = self.note_path(date, granularity)?;
        let note = self.vault.by_path(&path);
        tracing::trace!(%date, ?granularity, path = %path, found = note.is_some(), "Note lookup");
        note
    }

    pub fn resolve_daily(&self, date: &CalendarDate) -> Option<NoteHandle> {
        self.resolve(date, Granularity::Day)
    }

    pub fn resolve_weekly(&self, date: &CalendarDate) -> Option<NoteHandle> {
        self.resolve(date, Granularity::Week)
    }

    /// Heading text a day's section carries in the monthly note
    pub fn monthly_heading(&self, date: &CalendarDate) -> Option<String> {
        date.format(&self.settings.monthly_day_format)
    }

    /// Find the section for `date` inside its monthly note
    ///
    /// The first heading equal to the formatted day (ignoring case) wins.
    pub fn resolve_monthly_section(&self, date: &CalendarDate) -> Result<Option<MonthlySection>> {
        let Some(note) = self.resolve(date, Granularity::Month) else {
            return Ok(None);
        };
        let Some(target) = self.monthly_heading(date) else {
            return Ok(None);
        };
        let target = target.to_lowercase();

        let (text, outline) = self.vault.read_with_outline(&note)?;
        let Some(index) = outline
            .iter()
            .position(|heading| heading.text.to_lowercase() == target)
        else {
            tracing::debug!(%date, note = note.path(), heading = %target, "No matching heading in monthly note");
            return Ok(None);
        };

        let bounds = SectionBounds::from_outline(&outline, index, markdown::line_count(&text));
        tracing::debug!(
            %date,
            note = note.path(),
            start = bounds.start,
            end = bounds.end,
            "Resolved monthly section"
        );

        Ok(Some(MonthlySection {
            note,
            heading: outline[index].clone(),
            bounds,
            text,
        }))
    }
}

/// `folder/name.md`, or `name.md` when the folder is empty
fn join_note_path(folder: &str, name: &str) -> String {
    let folder = folder.trim_matches(|c| c == '/' || c == '\\');
    if folder.is_empty() {
        format!("{}{}", name, C::MARKDOWN_EXTENSION)
    } else {
        format!("{}/{}{}", folder, name, C::MARKDOWN_EXTENSION)
    }
}
