//! Streak source: marks dates that have a note

use crate::constants as C;
use crate::date::{CalendarDate, Granularity};
use crate::error::Result;
use crate::metadata::DayMetadata;
use crate::resolver::NoteResolver;
use crate::settings::SettingsStore;
use crate::vault::Vault;

use super::MetadataSource;

/// Emits `has-note` for dates whose daily or weekly note exists
///
/// Only existence matters; note text is never read and monthly notes do not
/// count.
pub struct StreakSource<'a, V: Vault + ?Sized> {
    vault: &'a V,
    settings: &'a SettingsStore,
}

impl<'a, V: Vault + ?Sized> StreakSource<'a, V> {
    pub fn new(vault: &'a V, settings: &'a SettingsStore) -> Self {
        Self { vault, settings }
    }

    fn classes(&self, date: &CalendarDate, granularity: Granularity) -> DayMetadata {
        let settings = self.settings.snapshot();
        let exists = NoteResolver::new(self.vault, &settings)
            .resolve(date, granularity)
            .is_some();

        let mut classes = Vec::new();
        if exists {
            classes.push(C::HAS_NOTE_CLASS.to_string());
        }
        DayMetadata::with_classes(classes)
    }
}

impl<V: Vault + ?Sized> MetadataSource for StreakSource<'_, V> {
    fn daily_metadata(&self, date: &CalendarDate) -> Result<DayMetadata> {
        Ok(self.classes(date, Granularity::Day))
    }

    fn weekly_metadata(&self, date: &CalendarDate) -> Result<DayMetadata> {
        Ok(self.classes(date, Granularity::Week))
    }
}
