pub mod cli;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod output;
pub mod pattern;
pub mod progress;
pub mod rename;
pub mod revert;
pub mod scanner;
pub mod undo_log;

pub use error::{AppError, ExitCode};
pub use mapping::{MappingError, PartMapping};
pub use pattern::{EpisodeMatch, EpisodePattern, PartMatch, PartPattern, PatternError};
pub use rename::{
    episode_name, extend_episodes, part_name, rename_parts, EpisodeOptions, PartOptions,
    Pipeline, RenameError, RenameOperation, RenameOutcome, RenameResult,
};
pub use revert::{undo_from_log, UndoError, UndoOperation, UndoResult};
pub use scanner::{scan_directory, DirectoryEntry, EntryKind, ScanOrder, ScannerError};
pub use undo_log::{
    read_undo_log, write_undo_log, UndoLogEntry, UndoLogError, UNDO_LOG_FILE_NAME, UNDO_PREFIX,
};
