//! Storage utilities for inkpad
//!
//! In-app file dialogs, recent-files persistence, and platform directories.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Recently opened files, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecentFiles {
    pub files: Vec<PathBuf>,
    pub max_entries: usize,
}

impl RecentFiles {
    pub fn new(max_entries: usize) -> Self {
        Self {
            files: Vec::new(),
            max_entries,
        }
    }

    /// Move `path` to the front, dropping any older occurrence and
    /// anything past the entry bound.
    pub fn add(&mut self, path: PathBuf) {
        self.files.retain(|p| p != &path);
        self.files.insert(0, path);
        self.files.truncate(self.max_entries);
    }

    pub fn load(config_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(config_path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, contents)?;
        Ok(())
    }
}

/// State backing the in-app open/save dialogs
#[derive(Debug, Clone)]
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected_index: Option<usize>,
    pub filter_extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

impl FileBrowser {
    pub fn new(start_dir: PathBuf) -> Self {
        let mut browser = Self {
            current_dir: start_dir,
            entries: Vec::new(),
            selected_index: None,
            filter_extensions: Vec::new(),
        };
        browser.refresh();
        browser
    }

    /// Restrict listed files to the given extensions (directories always show).
    pub fn with_filter(mut self, extensions: Vec<String>) -> Self {
        self.filter_extensions = extensions;
        self.refresh();
        self
    }

    fn passes_filter(&self, path: &Path) -> bool {
        if self.filter_extensions.is_empty() {
            return true;
        }
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.filter_extensions.iter().any(|f| f.to_lowercase() == ext)
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_index = None;

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_directory: true,
            });
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        if let Ok(read_dir) = std::fs::read_dir(&self.current_dir) {
            for entry in read_dir.flatten() {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().to_string();

                // Skip hidden files
                if name.starts_with('.') {
                    continue;
                }

                let is_directory = path.is_dir();
                if !is_directory && !self.passes_filter(&path) {
                    continue;
                }

                let entry = FileEntry { name, path, is_directory };
                if is_directory {
                    dirs.push(entry);
                } else {
                    files.push(entry);
                }
            }
        }

        // Directories first, each group alphabetical
        dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        self.entries.extend(dirs);
        self.entries.extend(files);
    }

    pub fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() {
            self.current_dir = path;
            self.refresh();
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }

    /// Directory a save dialog should write into: the selected directory
    /// if one is highlighted, otherwise the directory being browsed.
    pub fn save_directory(&self) -> PathBuf {
        match self.selected_entry() {
            Some(entry) if entry.is_directory && entry.name != ".." => entry.path.clone(),
            _ => self.current_dir.clone(),
        }
    }
}

/// Get the config directory for inkpad
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the user's documents directory
pub fn documents_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_files_front_insert() {
        let mut recent = RecentFiles::new(5);
        recent.add(PathBuf::from("/a.txt"));
        recent.add(PathBuf::from("/b.txt"));
        assert_eq!(recent.files[0], PathBuf::from("/b.txt"));
        assert_eq!(recent.files[1], PathBuf::from("/a.txt"));
    }

    #[test]
    fn test_recent_files_dedupe() {
        let mut recent = RecentFiles::new(5);
        recent.add(PathBuf::from("/a.txt"));
        recent.add(PathBuf::from("/b.txt"));
        recent.add(PathBuf::from("/a.txt"));
        assert_eq!(recent.files.len(), 2);
        assert_eq!(recent.files[0], PathBuf::from("/a.txt"));
    }

    #[test]
    fn test_recent_files_bound() {
        let mut recent = RecentFiles::new(3);
        for i in 0..6 {
            recent.add(PathBuf::from(format!("/{}.txt", i)));
        }
        assert_eq!(recent.files.len(), 3);
        assert_eq!(recent.files[0], PathBuf::from("/5.txt"));
    }

    #[test]
    fn test_recent_files_round_trip() {
        let dir = std::env::temp_dir().join("inkcore_test_recent");
        let config_path = dir.join("recent.json");
        let mut recent = RecentFiles::new(4);
        recent.add(PathBuf::from("/letters/hello.txt"));
        recent.save(&config_path).unwrap();
        let loaded = RecentFiles::load(&config_path).unwrap();
        assert_eq!(loaded.files, recent.files);
        assert_eq!(loaded.max_entries, 4);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
