use std::fs;
use std::path::Path;
use tracing::{debug, info, trace};

use crate::pattern::{EpisodeMatch, EpisodePattern};
use crate::progress::Progress;
use crate::scanner::{scan_directory, ScanOrder};
use crate::undo_log::{write_undo_log, UndoLogEntry};

use super::types::{Pipeline, RenameOperation, RenameOutcome, RenameResult};
use super::RenameError;

/// Options for the episode count extender
#[derive(Debug, Clone)]
pub struct EpisodeOptions {
    /// Episode number given to the first matching file
    pub start: u32,
    pub dry_run: bool,
}

impl Default for EpisodeOptions {
    fn default() -> Self {
        Self {
            start: 1,
            dry_run: false,
        }
    }
}

/// Name with the matched span replaced by `<season>E<NN><trailing>`.
///
/// The number is zero-padded to two digits; larger numbers are written in full.
pub fn episode_name(name: &str, found: &EpisodeMatch, episode: u64) -> String {
    format!(
        "{}{}E{:02}{}{}",
        &name[..found.span.start],
        found.season,
        episode,
        found.trailing,
        &name[found.span.end..]
    )
}

/// Number every matching file in `target_dir`, in name order, starting at `options.start`
pub fn extend_episodes(
    target_dir: &Path,
    pattern: &EpisodePattern,
    options: &EpisodeOptions,
    progress: &mut Progress,
) -> Result<RenameResult, RenameError> {
    let entries = scan_directory(target_dir, ScanOrder::Sorted)?;

    info!(
        pattern = pattern.as_str(),
        start = options.start,
        dry_run = options.dry_run,
        "Extending episode numbers"
    );

    progress.batch_start(Pipeline::EpisodeExtender.description(), target_dir);

    let mut result = RenameResult::new(Pipeline::EpisodeExtender, options.dry_run);
    let mut undo_entries = Vec::new();
    // Widened so a start of u32::MAX keeps counting
    let mut episode = u64::from(options.start);

    for entry in &entries {
        if !entry.is_rename_candidate() {
            trace!(name = %entry.name, "Skipping non-candidate entry");
            continue;
        }

        let Some(found) = pattern.find(&entry.name) else {
            debug!(name = %entry.name, "No match");
            continue;
        };

        debug!(name = %entry.name, ?found, episode, "Match found");

        let new_name = episode_name(&entry.name, &found, episode);
        // Counts matches, not successful renames
        episode += 1;

        let op = RenameOperation::new(entry.path.clone(), new_name);

        if options.dry_run {
            progress.dry_run_rename(&op.source_name, &op.destination_name);
            result.add_operation(op, RenameOutcome::Planned);
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
