//! Metadata sources for the calendar view
//!
//! Each source annotates a date on its own; [`CompositeSource`] merges
//! several of them into the single record the calendar renders.

pub mod streak;
pub mod word_count;

pub use streak::StreakSource;
pub use word_count::WordCountSource;

use crate::date::CalendarDate;
use crate::error::Result;
use crate::metadata::DayMetadata;

/// Something that can annotate calendar days and weeks
pub trait MetadataSource {
    fn daily_metadata(&self, date: &CalendarDate) -> Result<DayMetadata>;

    fn weekly_metadata(&self, date: &CalendarDate) -> Result<DayMetadata>;
}

/// Several sources merged in registration order
#[derive(Default)]
pub struct CompositeSource<'a> {
    sources: Vec<Box<dyn MetadataSource + 'a>>,
}

impl<'a> CompositeSource<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl MetadataSource + 'a) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl MetadataSource for CompositeSource<'_> {
    fn daily_metadata(&self, date: &CalendarDate) -> Result<DayMetadata> {
        let mut merged = DayMetadata::default();
        for source in &self.sources {
            merged = merged.merge(source.daily_metadata(date)?);
        }
        Ok(merged)
    }

    fn weekly_metadata(&self, date: &CalendarDate) -> Result<DayMetadata> {
        let mut merged = DayMetadata::default();
        for source in &self.sources {
            merged = merged.merge(source.weekly_metadata(date)?);
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants as C;
    use crate::settings::SettingsStore;
    use crate::vault::MemoryVault;

    #[test]
    fn test_composite_merges_streak_and_word_count() {
        let vault = MemoryVault::new().with_note("2024-03-15.md", "a few words");
        let settings = SettingsStore::default();
        let composite = CompositeSource::new()
            .with(StreakSource::new(&vault, &settings))
            .with(WordCountSource::new(&vault, &settings));
        assert_eq!(composite.len(), 2);

        let date = CalendarDate::from_ymd(2024, 3, 15).unwrap();
        let meta = composite.daily_metadata(&date).unwrap();
        assert!(meta.has_class(C::HAS_NOTE_CLASS));
        assert_eq!(meta.dot_count(), 1);

        let missing = CalendarDate::from_ymd(2024, 3, 16).unwrap();
        let meta = composite.daily_metadata(&missing).unwrap();
        assert_eq!(meta.classes, Some(vec![]));
        assert_eq!(meta.dots, Some(vec![]));
    }

    #[test]
    fn test_empty_composite() {
        let composite = CompositeSource::new();
        assert!(composite.is_empty());
        let date = CalendarDate::from_ymd(2024, 3, 15).unwrap();
        assert_eq!(composite.weekly_metadata(&date).unwrap(), DayMetadata::default());
    }
}
