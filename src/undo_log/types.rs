use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// File the undo log is written to, inside the working directory
pub const UNDO_LOG_FILE_NAME: &str = "undo_rename_log.txt";

/// Names starting with this are never treated as media files
pub const UNDO_PREFIX: &str = "undo";

const DELIMITER: char = '=';

#[derive(Error, Debug)]
pub enum UndoLogError {
    #[error("Failed to write undo log: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to read undo log: {0}")]
    Read(#[source] std::io::Error),

    #[error("Malformed undo log line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },
}

/// One reversible rename: the name now on disk and the name it had before
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoLogEntry {
    pub current_name: String,
    pub original_name: String,
}

impl UndoLogEntry {
    pub fn new(current_name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            current_name: current_name.into(),
            original_name: original_name.into(),
        }
    }

    /// `new=old\n`. Names are not escaped.
    pub fn to_line(&self) -> String {
        format!("{}{}{}\n", self.current_name, DELIMITER, self.original_name)
    }

    /// Split on the first `=`; anything after it belongs to the original name.
    ///
    /// Both sides must be bare file names inside the working directory.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (current, original) = line.split_once(DELIMITER)?;
        if !is_plain_file_name(current) || !is_plain_file_name(original) {
            return None;
        }
        Some(Self::new(current, original))
    }
}

/// Exactly one normal path component: no separators, no `.`/`..`, not empty
pub fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) => part == OsStr::new(name),
        _ => false,
    }
}

pub fn undo_log_path(target_dir: &Path) -> PathBuf {
    target_dir.join(UNDO_LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_line() {
        let entry = UndoLogEntry::new("Show.S01E01.mkv", "Show.S01.mkv");
        assert_eq!(entry.to_line(), "Show.S01E01.mkv=Show.S01.mkv\n");
    }

    #[test]
    fn test_parse_line() {
        let entry = UndoLogEntry::parse_line("Ep-pt1.mp4=Ep-A.mp4").unwrap();
        assert_eq!(entry.current_name, "Ep-pt1.mp4");
        assert_eq!(entry.original_name, "Ep-A.mp4");
    }

    #[test]
    fn test_parse_line_splits_on_first_delimiter() {
        let entry = UndoLogEntry::parse_line("a.mkv=b=c.mkv").unwrap();
        assert_eq!(entry.current_name, "a.mkv");
        assert_eq!(entry.original_name, "b=c.mkv");
    }

    #[test]
    fn test_parse_line_without_delimiter() {
        assert!(UndoLogEntry::parse_line("no delimiter here").is_none());
    }

    #[test]
    fn test_parse_line_rejects_paths() {
        assert!(UndoLogEntry::parse_line("/abs/victim.mkv=/abs/moved.mkv").is_none());
        assert!(UndoLogEntry::parse_line("a.mkv=../a.mkv").is_none());
        assert!(UndoLogEntry::parse_line("sub/a.mkv=a.mkv").is_none());
        assert!(UndoLogEntry::parse_line("a.mkv/=a.mkv").is_none());
        assert!(UndoLogEntry::parse_line("..=a.mkv").is_none());
    }

    #[test]
    fn test_parse_line_rejects_empty_names() {
        assert!(UndoLogEntry::parse_line("=x.mkv").is_none());
        assert!(UndoLogEntry::parse_line("x.mkv=").is_none());
    }

    #[test]
    fn test_parse_line_keeps_spaces() {
        let entry = UndoLogEntry::parse_line(" a .mkv= b.mkv").unwrap();
        assert_eq!(entry.current_name, " a .mkv");
        assert_eq!(entry.original_name, " b.mkv");
    }

    #[test]
    fn test_log_file_is_excluded_by_prefix() {
        assert!(UNDO_LOG_FILE_NAME.starts_with(UNDO_PREFIX));
    }
}
