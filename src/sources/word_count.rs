//! Word-count source: dots proportional to how much was written

use crate::date::CalendarDate;
use crate::error::Result;
use crate::metadata::{DayMetadata, DotSpec};
use crate::normalize;
use crate::quantize::quantize;
use crate::resolver::NoteResolver;
use crate::settings::{Settings, SettingsStore};
use crate::vault::{NoteHandle, Vault};

use super::MetadataSource;

/// Emits up to five dots per date based on the note's word count
///
/// Days without a daily note fall back to their section in the monthly
/// note. Weeks only look at the weekly note.
pub struct WordCountSource<'a, V: Vault + ?Sized> {
    vault: &'a V,
    settings: &'a SettingsStore,
}

impl<'a, V: Vault + ?Sized> WordCountSource<'a, V> {
    pub fn new(vault: &'a V, settings: &'a SettingsStore) -> Self {
        Self { vault, settings }
    }

    fn daily_dots(&self, date: &CalendarDate, settings: &Settings) -> Result<Vec<DotSpec>> {
        let resolver = NoteResolver::new(self.vault, settings);

        if let Some(note) = resolver.resolve_daily(date) {
            return self.note_dots(&note, settings);
        }

        match resolver.resolve_monthly_section(date)? {
            Some(section) => Ok(text_dots(&section.content(), settings)),
            None => Ok(Vec::new()),
        }
    }

    fn weekly_dots(&self, date: &CalendarDate, settings: &Settings) -> Result<Vec<DotSpec>> {
        match NoteResolver::new(self.vault, settings).resolve_weekly(date) {
            Some(note) => self.note_dots(&note, settings),
            None => Ok(Vec::new()),
        }
    }

    fn note_dots(&self, note: &NoteHandle, settings: &Settings) -> Result<Vec<DotSpec>> {
        let text = self.vault.read_text(note)?;
        Ok(text_dots(&text, settings))
    }
}

fn text_dots(text: &str, settings: &Settings) -> Vec<DotSpec> {
    let words = normalize::word_count(text);
    let quantized = quantize(words, settings.words_per_dot);
    tracing::trace!(words, dots = quantized.value(), "Quantized word count");
    quantized.dots()
}

impl<V: Vault + ?Sized> MetadataSource for WordCountSource<'_, V> {
    fn daily_metadata(&self, date: &CalendarDate) -> Result<DayMetadata> {
        let settings = self.settings.snapshot();
        if !settings.word_count_enabled() {
            return Ok(DayMetadata::with_dots(Vec::new()));
        }
        Ok(DayMetadata::with_dots(self.daily_dots(date, &settings)?))
    }

    fn weekly_metadata(&self, date: &CalendarDate) -> Result<DayMetadata> {
        let settings = self.settings.snapshot();
        if !settings.word_count_enabled() {
            return Ok(DayMetadata::with_dots(Vec::new()));
        }
        Ok(DayMetadata::with_dots(self.weekly_dots(date, &settings)?))
    }
}
