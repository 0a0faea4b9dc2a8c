mod episodes;
mod parts;
mod types;

use thiserror::Error;

use crate::scanner::ScannerError;
use crate::undo_log::UndoLogError;

pub use episodes::{episode_name, extend_episodes, EpisodeOptions};
pub use parts::{part_name, rename_parts, PartOptions};
pub use types::{Pipeline, RenameOperation, RenameOutcome, RenameResult};

/// Errors that abort a rename batch
#[derive(Error, Debug)]
pub enum RenameError {
    #[error(transparent)]
    Scan(#[from] ScannerError),

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Filesystem {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    UndoLog(#[from] UndoLogError),
}
