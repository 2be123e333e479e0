//! Metadata records handed to the calendar view

use serde::{Serialize, Serializer};

use crate::constants as C;

/// Visual style of a dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotStyle {
    Normal,
    /// The note exists but has no words
    EmptyMarker,
}

impl DotStyle {
    /// Class name understood by the calendar view
    pub fn class_name(self) -> &'static str {
        match self {
            DotStyle::Normal => "",
            DotStyle::EmptyMarker => C::EMPTY_NOTE_CLASS,
        }
    }
}

impl Serialize for DotStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.class_name())
    }
}

/// A single dot under a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotSpec {
    pub color: String,
    pub is_filled: bool,
    pub class_name: DotStyle,
}

impl DotSpec {
    /// Filled dot standing for a chunk of words
    pub fn normal() -> Self {
        Self {
            color: C::DEFAULT_DOT_COLOR.to_string(),
            is_filled: true,
            class_name: DotStyle::Normal,
        }
    }

    /// Hollow dot marking an empty note
    pub fn empty_marker() -> Self {
        Self {
            color: C::DEFAULT_DOT_COLOR.to_string(),
            is_filled: false,
            class_name: DotStyle::EmptyMarker,
        }
    }
}

/// Annotations for one date at one granularity
///
/// A field left as `None` means "no annotation of that kind" and is omitted
/// when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dots: Option<Vec<DotSpec>>,
}

impl DayMetadata {
    pub fn with_classes(classes: Vec<String>) -> Self {
        Self {
            classes: Some(classes),
            dots: None,
        }
    }

    pub fn with_dots(dots: Vec<DotSpec>) -> Self {
        Self {
            classes: None,
            dots: Some(dots),
        }
    }

    /// Combine two records: classes and dots are concatenated, dots capped
    /// at the maximum a day can show
    pub fn merge(mut self, other: DayMetadata) -> Self {
        if let Some(classes) = other.classes {
            self.classes.get_or_insert_with(Vec::new).extend(classes);
        }
        if let Some(dots) = other.dots {
            let merged = self.dots.get_or_insert_with(Vec::new);
            merged.extend(dots);
            merged.truncate(C::MAX_DOTS);
        }
        self
    }

    pub fn dot_count(&self) -> usize {
        self.dots.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .as_ref()
            .map(|classes| classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_dots() {
        let meta = DayMetadata::with_dots(vec![DotSpec::normal(), DotSpec::empty_marker()]);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dots": [
                    {"color": "default", "isFilled": true, "className": ""},
                    {"color": "default", "isFilled": false, "className": "empty-note"}
                ]
            })
        );
    }

    #[test]
    fn test_serialize_classes_only() {
        let meta = DayMetadata::with_classes(vec!["has-note".to_string()]);
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"classes":["has-note"]}"#);
    }

    #[test]
    fn test_merge() {
        let streak = DayMetadata::with_classes(vec!["has-note".to_string()]);
        let words = DayMetadata::with_dots(vec![DotSpec::normal(); 3]);
        let merged = streak.merge(words).merge(DayMetadata::with_dots(vec![DotSpec::normal(); 4]));

        assert!(merged.has_class("has-note"));
        assert_eq!(merged.dot_count(), C::MAX_DOTS);
    }

    #[test]
    fn test_merge_keeps_absent_fields_absent() {
        let merged = DayMetadata::default().merge(DayMetadata::default());
        assert_eq!(merged, DayMetadata::default());
    }
}
