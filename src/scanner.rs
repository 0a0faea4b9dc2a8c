use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

use crate::undo_log::UNDO_PREFIX;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// Order in which entries are handed to a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    /// Sorted by name
    Sorted,
    /// Whatever order the filesystem returns
    Enumeration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Other,
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: String, path: PathBuf, kind: EntryKind) -> Self {
        Self { name, path, kind }
    }

    /// Plain files only, and never the undo log or anything else prefixed with `undo`
    pub fn is_rename_candidate(&self) -> bool {
        self.kind == EntryKind::File && !self.name.starts_with(UNDO_PREFIX)
    }
}

pub fn scan_directory(target: &Path, order: ScanOrder) -> Result<Vec<DirectoryEntry>, ScannerError> {
    debug!(path = ?target, ?order, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let mut entries = Vec::new();

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        // The undo log is UTF-8 text, so only names it can record are kept
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => {
                debug!(entry = ?path, "Skipping name that is not valid UTF-8");
                continue;
            }
        };

        let kind = if path.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        entries.push(DirectoryEntry::new(name, path, kind));
    }

    if order == ScanOrder::Sorted {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}
