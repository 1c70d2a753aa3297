//! Document model for inkpad
//!
//! The text being edited, the file it belongs to, and whether it has
//! unsaved changes. File access goes through the `file_io` service.

use crate::file_io::{self, Result};
use std::path::PathBuf;

/// A text document with its file association and dirty state.
///
/// `modified` is false only right after creation, a successful load, or a
/// successful save; every edit sets it until the next save.
pub struct Document {
    pub text: String,
    pub path: Option<PathBuf>,
    pub modified: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            path: None,
            modified: false,
        }
    }

    /// Load a document from disk.
    pub fn open(path: PathBuf) -> Result<Self> {
        let text = file_io::read_text(&path)?;
        Ok(Self {
            text,
            path: Some(path),
            modified: false,
        })
    }

    /// Write back to the associated file. Callers must ensure a path is
    /// associated first (save-as handles the untitled case).
    pub fn save(&mut self) -> Result<()> {
        if let Some(ref path) = self.path {
            file_io::write_text(path, &self.text)?;
            self.modified = false;
        }
        Ok(())
    }

    /// Write to `path` and adopt it as the document's file.
    pub fn save_as(&mut self, path: PathBuf) -> Result<()> {
        file_io::write_text(&path, &self.text)?;
        self.path = Some(path);
        self.modified = false;
        Ok(())
    }

    /// File name without directory, or "untitled".
    pub fn file_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled".to_string())
    }

    /// Title for the window: file name plus a `*` marker when dirty.
    pub fn display_title(&self) -> String {
        if self.modified {
            format!("{}*", self.file_name())
        } else {
            self.file_name()
        }
    }

    // ---------------------------------------------------------------
    // Status bar stats
    // ---------------------------------------------------------------

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("inkpad_test_document");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_new_document_is_pristine() {
        let doc = Document::new();
        assert_eq!(doc.text, "");
        assert!(doc.path.is_none());
        assert!(!doc.modified);
        assert_eq!(doc.display_title(), "untitled");
    }

    #[test]
    fn test_modified_marker_in_title() {
        let mut doc = Document::new();
        doc.text.push_str("draft");
        doc.modified = true;
        assert_eq!(doc.display_title(), "untitled*");
    }

    #[test]
    fn test_save_as_adopts_path_and_clears_modified() {
        let path = scratch_path("adopted.txt");
        let mut doc = Document::new();
        doc.text.push_str("some words\n");
        doc.modified = true;

        doc.save_as(path.clone()).unwrap();
        assert_eq!(doc.path.as_deref(), Some(path.as_path()));
        assert!(!doc.modified);
        assert_eq!(doc.display_title(), "adopted.txt");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_open_save_round_trip() {
        let path = scratch_path("reloaded.txt");
        let mut doc = Document::new();
        doc.text.push_str("line one\nline two");
        doc.save_as(path.clone()).unwrap();

        let reloaded = Document::open(path.clone()).unwrap();
        assert_eq!(reloaded.text, doc.text);
        assert!(!reloaded.modified);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let path = scratch_path("never_written.txt");
        let _ = std::fs::remove_file(&path);
        assert!(Document::open(path).is_err());
    }

    #[test]
    fn test_counts() {
        let mut doc = Document::new();
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.word_count(), 0);

        doc.text.push_str("one two\nthree");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.word_count(), 3);
        assert_eq!(doc.char_count(), 13);
    }
}
