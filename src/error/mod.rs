mod codes;

pub use codes::ExitCode;

use crate::mapping::MappingError;
use crate::pattern::PatternError;
use crate::rename::RenameError;
use crate::revert::UndoError;
use crate::scanner::ScannerError;
use crate::undo_log::UndoLogError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Working directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    #[error(transparent)]
    InvalidMapping(#[from] MappingError),

    #[error("Undo log error: {0}")]
    UndoLogError(#[from] UndoLogError),

    #[error("Rename failed: {from} -> {to}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::InvalidPattern(_) => ExitCode::InvalidPattern,
            AppError::InvalidMapping(_) => ExitCode::InvalidMapping,
            AppError::UndoLogError(_) => ExitCode::UndoLogError,
            AppError::RenameError { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                ExitCode::PermissionError
            }
            AppError::RenameError { .. } => ExitCode::RenameError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::InvalidPattern(err) => match err {
                PatternError::InvalidRegex { pattern, reason } => format!(
                    "The regex pattern could not be compiled:\n  {}\n\n{}",
                    pattern, reason
                ),
                PatternError::TooFewGroups {
                    pattern,
                    required,
                    found,
                } => format!(
                    "The regex pattern has {} capture groups, at least {} are required:\n  {}\n\n\
                     Groups are read by position, or by name when the pattern uses\n\
                     named groups (e.g. (?P<season>S\\d+)).",
                    found, required, pattern
                ),
            },

            AppError::InvalidMapping(err) => {
                format!(
                    "{}\n\n\
                     The mapping must be a JSON object of strings, e.g.\n  \
                     '{{\"A\": \"-part-1\", \"B\": \"-part-2\"}}'",
                    err
                )
            }

            AppError::UndoLogError(err) => {
                format!(
                    "{}\n\n\
                     Each line of the undo log must have the form <new name>=<old name>.",
                    err
                )
            }

            AppError::RenameError { from, to, source } => {
                format!(
                    "Failed to rename file:\n\
                     From: {}\n\
                     To:   {}\n\
                     Error: {}\n\n\
                     Files renamed before this one were not logged for undo.",
                    from, to, source
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::Scan(e) => e.into(),
            RenameError::Filesystem { from, to, source } => {
                AppError::RenameError { from, to, source }
            }
            RenameError::UndoLog(e) => e.into(),
        }
    }
}

impl From<UndoError> for AppError {
    fn from(err: UndoError) -> Self {
        match err {
            UndoError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            UndoError::NotADirectory(path) => AppError::NotADirectory { path },
            UndoError::UndoLog(e) => e.into(),
            UndoError::RenameError { from, to, source } => {
                AppError::RenameError { from, to, source }
            }
        }
    }
}
