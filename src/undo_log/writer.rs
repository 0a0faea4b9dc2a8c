use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::*;

/// Write the batch's undo entries to `target_dir`, replacing any previous log.
///
/// An empty batch writes nothing and leaves an existing log untouched.
pub fn write_undo_log(
    entries: &[UndoLogEntry],
    target_dir: &Path,
) -> Result<Option<PathBuf>, UndoLogError> {
    if entries.is_empty() {
        debug!("No renames recorded, undo log not written");
        return Ok(None);
    }

    let path = undo_log_path(target_dir);
    write_to_path(entries, &path)?;

    info!(count = entries.len(), path = ?path, "Undo log written");

    Ok(Some(path))
}

fn write_to_path(entries: &[UndoLogEntry], path: &Path) -> Result<(), UndoLogError> {
    // Temp name keeps the undo prefix so a crashed write is never picked up as media
    let temp_path = path.with_extension("txt.tmp");

    {
        let file = File::create(&temp_path).map_err(UndoLogError::Write)?;
        let mut writer = BufWriter::new(file);
        for entry in entries {
            writer
                .write_all(entry.to_line().as_bytes())
                .map_err(UndoLogError::Write)?;
        }
        writer.flush().map_err(UndoLogError::Write)?;
    }

    fs::rename(&temp_path, path).map_err(UndoLogError::Write)?;

    Ok(())
}
