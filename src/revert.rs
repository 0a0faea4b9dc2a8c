use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::progress::Progress;
use crate::undo_log::{read_undo_log, undo_log_path, UndoLogError};

#[derive(Debug, thiserror::Error)]
pub enum UndoError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    UndoLog(#[from] UndoLogError),

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

/// A single restored rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOperation {
    pub current_name: String,
    pub original_name: String,
}

/// Result of applying an undo log
#[derive(Debug, Default)]
pub struct UndoResult {
    /// False when the directory had no undo log
    pub log_found: bool,
    pub restored: Vec<UndoOperation>,
    /// Logged names that were not on disk
    pub missing: Vec<String>,
}

/// Reverse every rename recorded in the undo log of `target_dir`.
///
/// A missing log is not an error, and neither is a logged file that is no
/// longer present. Entries run in log order without collision checks.
pub fn undo_from_log(target_dir: &Path, progress: &mut Progress) -> Result<UndoResult, UndoError> {
    if !target_dir.exists() {
        return Err(UndoError::PathNotFound(target_dir.to_path_buf()));
    }

    if !target_dir.is_dir() {
        return Err(UndoError::NotADirectory(target_dir.to_path_buf()));
    }

    let Some(entries) = read_undo_log(target_dir)? else {
        info!("No undo log in {:?}", target_dir);
        progress.undo_log_missing(&undo_log_path(target_dir));
        return Ok(UndoResult::default());
    };

    info!("Undo log contains {} entries", entries.len());
    progress.undo_start(entries.len());

    let mut result = UndoResult {
        log_found: true,
        ..UndoResult::default()
    };
    let total = entries.len();

    for (i, entry) in entries.into_iter().enumerate() {
        let current_path = target_dir.join(&entry.current_name);

        if !current_path.exists() {
            debug!(name = %entry.current_name, "Logged file not present, skipping");
            result.missing.push(entry.current_name);
            continue;
        }

        let original_path = target_dir.join(&entry.original_name);

        progress.undo_progress(i + 1, total, &entry.current_name, &entry.original_name);
        info!("Reverting: {} -> {}", entry.current_name, entry.original_name);

        fs::rename(&current_path, &original_path).map_err(|e| UndoError::RenameError {
            from: entry.current_name.clone(),
            to: entry.original_name.clone(),
            source: e,
        })?;

        result.restored.push(UndoOperation {
            current_name: entry.current_name,
            original_name: entry.original_name,
        });
    }

    progress.undo_complete(result.restored.len(), result.missing.len());

    Ok(result)
}
