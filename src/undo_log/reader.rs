use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, trace};

use super::types::*;

/// Read the undo log from `target_dir`.
///
/// Returns `Ok(None)` when there is no log. Blank lines are skipped; a line
/// without `=` or naming anything but a bare file name is malformed.
pub fn read_undo_log(target_dir: &Path) -> Result<Option<Vec<UndoLogEntry>>, UndoLogError> {
    let path = undo_log_path(target_dir);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = ?path, "No undo log present");
            return Ok(None);
        }
        Err(e) => return Err(UndoLogError::Read(e)),
    };

    let mut entries = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(UndoLogError::Read)?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            continue;
        }

        let entry = UndoLogEntry::parse_line(line).ok_or_else(|| UndoLogError::MalformedLine {
            line: index + 1,
            content: line.to_string(),
        })?;

        trace!(current = %entry.current_name, original = %entry.original_name, "Read undo entry");
        entries.push(entry);
    }

    debug!(count = entries.len(), path = ?path, "Undo log loaded");

    Ok(Some(entries))
}
