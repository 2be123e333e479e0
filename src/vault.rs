//! Host services consumed by the resolver and metadata sources
//!
//! The calendar never creates or edits notes. It only needs to look a note
//! up by path, read its current text and get its heading outline. The
//! [`Vault`] trait captures that contract; [`MemoryVault`] and [`FsVault`]
//! implement it.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{CalendarError, Result};
use crate::markdown::{self, HeadingEntry};

/// Reference to a note that exists in the vault
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteHandle {
    path: String,
}

impl NoteHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Vault-relative path, forward slashes
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Read-only view of a note store
pub trait Vault {
    /// Look up a note by vault-relative path
    fn by_path(&self, path: &str) -> Option<NoteHandle>;

    /// Full current text of a note
    fn read_text(&self, note: &NoteHandle) -> Result<String>;

    /// Heading outline of a note, in document order
    fn headings_of(&self, note: &NoteHandle) -> Result<Vec<HeadingEntry>>;

    /// Text and outline of a note taken from the same version of it
    ///
    /// Hosts that parse the outline themselves should override this so the
    /// note is read once.
    fn read_with_outline(&self, note: &NoteHandle) -> Result<(String, Vec<HeadingEntry>)> {
        let text = self.read_text(note)?;
        let outline = self.headings_of(note)?;
        Ok((text, outline))
    }
}

impl<V: Vault + ?Sized> Vault for &V {
    fn by_path(&self, path: &str) -> Option<NoteHandle> {
        (**self).by_path(path)
    }

    fn read_text(&self, note: &NoteHandle) -> Result<String> {
        (**self).read_text(note)
    }

    fn headings_of(&self, note: &NoteHandle) -> Result<Vec<HeadingEntry>> {
        (**self).headings_of(note)
    }

    fn read_with_outline(&self, note: &NoteHandle) -> Result<(String, Vec<HeadingEntry>)> {
        (**self).read_with_outline(note)
    }
}

/// Normalize a vault-relative path: forward slashes, no empty or `.` parts
pub fn normalize_note_path(path: &str) -> String {
    path.split(|c| c == '/' || c == '\\')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/")
}

// === MemoryVault ===

/// In-memory vault keyed by note path
#[derive(Debug, Clone, Default)]
pub struct MemoryVault {
    notes: BTreeMap<String, String>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a note
    pub fn insert(&mut self, path: &str, content: impl Into<String>) {
        self.notes.insert(normalize_note_path(path), content.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_note(mut self, path: &str, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.notes.remove(&normalize_note_path(path))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn content(&self, note: &NoteHandle) -> Result<&str> {
        self.notes.get(note.path()).map(String::as_str).ok_or_else(|| {
            CalendarError::io(
                note.path(),
                io::Error::new(io::ErrorKind::NotFound, "note was removed"),
            )
        })
    }
}

impl Vault for MemoryVault {
    fn by_path(&self, path: &str) -> Option<NoteHandle> {
        let path = normalize_note_path(path);
        self.notes.contains_key(&path).then(|| NoteHandle::new(path))
    }

    fn read_text(&self, note: &NoteHandle) -> Result<String> {
        self.content(note).map(str::to_string)
    }

    fn headings_of(&self, note: &NoteHandle) -> Result<Vec<HeadingEntry>> {
        self.content(note).map(markdown::extract_outline)
    }
}

// === FsVault ===

/// Vault backed by a directory of markdown files
///
/// Every call goes back to the filesystem, so notes created or edited
/// between two calendar renders are picked up.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    /// Open a vault rooted at an existing directory
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let canonical = dunce::canonicalize(root).map_err(|e| CalendarError::io(root, e))?;
        if !canonical.is_dir() {
            return Err(CalendarError::io(
                root,
                io::Error::new(io::ErrorKind::InvalidInput, "vault root is not a directory"),
            ));
        }
        Ok(Self { root: canonical })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a vault-relative path to a filesystem path inside the root
    ///
    /// `..` components and absolute paths are rejected.
    pub fn note_path(&self, relative: &str) -> Result<PathBuf> {
        let mut result = self.root.clone();

        for component in relative.split(|c| c == '/' || c == '\\') {
            match component {
                "" | "." => continue,
                ".." => {
                    return Err(CalendarError::PathEscape {
                        path: relative.to_string(),
                    })
                }
                _ if component.len() >= 2 && component.as_bytes()[1] == b':' => {
                    return Err(CalendarError::PathEscape {
                        path: relative.to_string(),
                    })
                }
                _ => result.push(component),
            }
        }

        Ok(result)
    }

    fn read(&self, note: &NoteHandle) -> Result<String> {
        let path = self.note_path(note.path())?;
        fs::read_to_string(&path).map_err(|e| CalendarError::io(path, e))
    }
}

impl Vault for FsVault {
    fn by_path(&self, path: &str) -> Option<NoteHandle> {
        let full = match self.note_path(path) {
            Ok(full) => full,
            Err(e) => {
                tracing::debug!(path, error = %e, "Rejected note path");
                return None;
            }
        };
        full.is_file().then(|| NoteHandle::new(normalize_note_path(path)))
    }

    fn read_text(&self, note: &NoteHandle) -> Result<String> {
        self.read(note)
    }

    fn headings_of(&self, note: &NoteHandle) -> Result<Vec<HeadingEntry>> {
        self.read(note).map(|content| markdown::extract_outline(&content))
    }

    fn read_with_outline(&self, note: &NoteHandle) -> Result<(String, Vec<HeadingEntry>)> {
        let content = self.read(note)?;
        let outline = markdown::extract_outline(&content);
        Ok((content, outline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_note_path() {
        assert_eq!(normalize_note_path("/Journal//2024-03.md"), "Journal/2024-03.md");
        assert_eq!(normalize_note_path("./a\\b.md"), "a/b.md");
        assert_eq!(normalize_note_path("2024-03-15.md"), "2024-03-15.md");
    }

    #[test]
    fn test_memory_vault_lookup_and_read() {
        let vault = MemoryVault::new().with_note("Daily/2024-03-15.md", "# Today\nhello");
        let note = vault.by_path("/Daily/2024-03-15.md").unwrap();
        assert_eq!(note.path(), "Daily/2024-03-15.md");
        assert_eq!(vault.read_text(&note).unwrap(), "# Today\nhello");
        assert_eq!(vault.headings_of(&note).unwrap(), vec![HeadingEntry::new("Today", 1, 0)]);
        assert!(vault.by_path("Daily/2024-03-16.md").is_none());
    }

    #[test]
    fn test_memory_vault_read_after_remove_fails() {
        let mut vault = MemoryVault::new().with_note("a.md", "text");
        let note = vault.by_path("a.md").unwrap();
        vault.remove("a.md");
        assert!(vault.is_empty());
        assert!(matches!(vault.read_text(&note), Err(CalendarError::Io { .. })));
    }

    #[test]
    fn test_fs_vault_lookup() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Daily")).unwrap();
        fs::write(dir.path().join("Daily/2024-03-15.md"), "## Log\nwords here").unwrap();

        let vault = FsVault::open(dir.path()).unwrap();
        let note = vault.by_path("Daily/2024-03-15.md").unwrap();
        assert_eq!(vault.read_text(&note).unwrap(), "## Log\nwords here");
        assert_eq!(vault.headings_of(&note).unwrap()[0].text, "Log");

        assert!(vault.by_path("Daily/2024-03-16.md").is_none());
        // Directories are not notes
        assert!(vault.by_path("Daily").is_none());
    }

    #[test]
    fn test_fs_vault_read_with_outline() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2024-03.md"), "# March\n\n## 15\nbody\n").unwrap();

        let vault = FsVault::open(dir.path()).unwrap();
        let note = vault.by_path("2024-03.md").unwrap();
        let (text, outline) = vault.read_with_outline(&note).unwrap();
        assert_eq!(text, "# March\n\n## 15\nbody\n");
        assert_eq!(outline, markdown::extract_outline(&text));
        assert_eq!(outline[1], HeadingEntry::new("15", 2, 2));
    }

    #[test]
    fn test_fs_vault_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let vault = FsVault::open(dir.path()).unwrap();
        assert!(matches!(
            vault.note_path("../outside.md"),
            Err(CalendarError::PathEscape { .. })
        ));
        assert!(vault.by_path("../outside.md").is_none());
        // Leading slash is treated as vault-relative
        assert_eq!(vault.note_path("/a.md").unwrap(), vault.root().join("a.md"));
    }

    #[test]
    fn test_fs_vault_open_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsVault::open(dir.path().join("missing")).is_err());
    }
}
