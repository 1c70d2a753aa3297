//! Whole-file text I/O for inkpad
//!
//! Files are read and written byte-exact: line separators are neither
//! stripped on read nor appended on write, so saving a document and
//! reopening it yields the same text.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FileError>;

/// Read the full content of a text file.
pub fn read_text(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Overwrite `path` with exactly `text`.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)?;
    Ok(())
}

/// Append `.txt` when the chosen file name has no extension.
/// Names that already carry an extension are left alone.
pub fn ensure_txt_extension(name: &str) -> String {
    if Path::new(name).extension().is_some() {
        name.to_string()
    } else {
        format!("{}.txt", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("inkpad_test_io");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_round_trip() {
        let path = scratch_file("round_trip.txt");
        let text = "first line\nsecond line\n";
        write_text(&path, text).unwrap();
        assert_eq!(read_text(&path).unwrap(), text);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_round_trip_preserves_separators() {
        // No trailing newline, and CRLF kept as-is
        let path = scratch_file("separators.txt");
        let text = "windows line\r\nlast line without newline";
        write_text(&path, text).unwrap();
        assert_eq!(read_text(&path).unwrap(), text);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let path = scratch_file("does_not_exist.txt");
        let _ = std::fs::remove_file(&path);
        assert!(read_text(&path).is_err());
    }

    #[test]
    fn test_ensure_txt_extension() {
        assert_eq!(ensure_txt_extension("notes"), "notes.txt");
        assert_eq!(ensure_txt_extension("notes.txt"), "notes.txt");
        assert_eq!(ensure_txt_extension("notes.md"), "notes.md");
    }
}
