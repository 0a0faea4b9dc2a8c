use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace, warn};

use crate::mapping::PartMapping;
use crate::pattern::PartPattern;
use crate::progress::Progress;
use crate::scanner::{scan_directory, ScanOrder};
use crate::undo_log::{is_plain_file_name, write_undo_log, UndoLogEntry};

use super::types::{Pipeline, RenameOperation, RenameOutcome, RenameResult};
use super::RenameError;

/// Options for the part indicator renamer
#[derive(Debug, Clone, Default)]
pub struct PartOptions {
    pub dry_run: bool,
}

/// Rewrite every match in `name` as `<coordinates><mapped indicator><extension>`.
///
/// Returns `None` when the pattern does not match at all.
pub fn part_name(name: &str, pattern: &PartPattern, mapping: &PartMapping) -> Option<String> {
    let renamed = pattern.replace_all(name, |part| {
        format!(
            "{}{}{}",
            part.coordinates,
            mapping.substitute(&part.indicator),
            part.extension
        )
    });

    match renamed {
        Cow::Borrowed(_) => None,
        Cow::Owned(new_name) => Some(new_name),
    }
}

/// Rename files in `target_dir` whose part indicators change under `mapping`
pub fn rename_parts(
    target_dir: &Path,
    pattern: &PartPattern,
    mapping: &PartMapping,
    options: &PartOptions,
    progress: &mut Progress,
) -> Result<RenameResult, RenameError> {
    let entries = scan_directory(target_dir, ScanOrder::Enumeration)?;

    info!(
        pattern = pattern.as_str(),
        mappings = mapping.len(),
        dry_run = options.dry_run,
        "Renaming part indicators"
    );

    progress.batch_start(Pipeline::PartIndicator.description(), target_dir);

    let mut result = RenameResult::new(Pipeline::PartIndicator, options.dry_run);
    let mut undo_entries = Vec::new();

    for entry in &entries {
        if !entry.is_rename_candidate() {
            trace!(name = %entry.name, "Skipping non-candidate entry");
            continue;
        }

        let new_name = match part_name(&entry.name, pattern, mapping) {
            Some(new_name) if new_name != entry.name => new_name,
            _ => {
                debug!(name = %entry.name, "Name unchanged");
                continue;
            }
        };

        if !is_plain_file_name(&new_name) {
            warn!("Mapped name is not a plain file name, skipping: {}", new_name);
            progress.warn(&format!(
                "'{}' is not a valid file name, not renaming '{}'",
                new_name, entry.name
            ));
            continue;
        }

        let op = RenameOperation::new(entry.path.clone(), new_name);

        // An existing destination and a dry run both leave the file alone
        let taken = op.destination_path.exists();
        if taken || options.dry_run {
            if taken {
                warn!(
                    "Destination exists, not renaming: {} -> {}",
                    op.source_name, op.destination_name
                );
                progress.skipped_existing(&op.source_name, &op.destination_name);
                result.add_operation(op, RenameOutcome::SkippedExisting);
            } else {
                progress.dry_run_rename(&op.source_name, &op.destination_name);
                result.add_operation(op, RenameOutcome::Planned);
            }
            continue;
        }

        fs::rename(&op.source_path, &op.destination_path).map_err(|e| {
            RenameError::Filesystem {
                from: op.source_name.clone(),
                to: op.destination_name.clone(),
                source: e,
            }
        })?;

        info!("Renamed: {} -> {}", op.source_name, op.destination_name);
        progress.renamed(&op.source_name, &op.destination_name);

        undo_entries.push(UndoLogEntry::new(&op.destination_name, &op.source_name));
        result.add_operation(op, RenameOutcome::Applied);
    }

    if !options.dry_run {
        result.undo_log_path = write_undo_log(&undo_entries, target_dir)?;
        match &result.undo_log_path {
            Some(path) => progress.log_written(path),
            None => progress.no_changes(),
        }
    }

    Ok(result)
}
