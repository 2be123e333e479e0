//! Error types for note-calendar
//!
//! A missing note, section or heading is never an error: those come back as
//! `None` or an empty dot list. Errors are reserved for host I/O failures,
//! unreadable settings and bad command-line input.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while computing calendar metadata
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path:?}: {reason}")]
    Settings { path: PathBuf, reason: String },

    #[error("invalid date: {input} (expected {expected})")]
    InvalidDate { input: String, expected: &'static str },

    #[error("path escapes the vault root: {path}")]
    PathEscape { path: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalendarError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CalendarError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a settings error for a file that could not be used
    pub fn settings(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        CalendarError::Settings {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
