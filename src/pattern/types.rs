use std::ops::Range;
use thiserror::Error;

/// One match of an episode pattern against a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeMatch {
    /// Byte range of the whole match within the file name
    pub span: Range<usize>,
    /// Season token, kept in front of the new episode number
    pub season: String,
    /// Original episode indicator; matched but replaced
    pub replaced: String,
    /// Text following the episode indicator, kept after the new number
    pub trailing: String,
}

/// One match of a part pattern against a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartMatch {
    /// Leading series coordinates, kept verbatim
    pub coordinates: String,
    /// Part indicator, looked up in the mapping
    pub indicator: String,
    /// Matched but not carried into the new name
    pub unused: String,
    /// File extension, kept verbatim
    pub extension: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid regex pattern '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },

    #[error("Pattern '{pattern}' has {found} capture groups, at least {required} are required")]
    TooFewGroups {
        pattern: String,
        required: usize,
        found: usize,
    },
}
