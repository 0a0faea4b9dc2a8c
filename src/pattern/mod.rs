mod types;

pub use types::*;

use regex::{Captures, Regex};
use std::borrow::Cow;
use tracing::debug;

// Field names usable as named groups instead of positional ones
const EPISODE_FIELDS: [&str; 3] = ["season", "replaced", "trailing"];
const PART_FIELDS: [&str; 4] = ["coordinates", "indicator", "unused", "extension"];

/// Pattern for the episode-count extender: season, replaced indicator, trailing text
#[derive(Debug, Clone)]
pub struct EpisodePattern {
    regex: Regex,
    groups: [usize; 3],
}

/// Pattern for the part-indicator renamer: coordinates, indicator, unused, extension
#[derive(Debug, Clone)]
pub struct PartPattern {
    regex: Regex,
    groups: [usize; 4],
}

impl EpisodePattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = compile(pattern, EPISODE_FIELDS.len())?;
        let groups = resolve_groups(&regex, EPISODE_FIELDS);
        Ok(Self { regex, groups })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// First match anywhere in `name`
    pub fn find(&self, name: &str) -> Option<EpisodeMatch> {
        let captures = self.regex.captures(name)?;
        let whole = captures.get(0)?;

        Some(EpisodeMatch {
            span: whole.range(),
            season: group(&captures, self.groups[0]),
            replaced: group(&captures, self.groups[1]),
            trailing: group(&captures, self.groups[2]),
        })
    }
}

impl PartPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = compile(pattern, PART_FIELDS.len())?;
        let groups = resolve_groups(&regex, PART_FIELDS);
        Ok(Self { regex, groups })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Replace every non-overlapping match in `name` with the output of `build`.
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    pub fn replace_all<'a, F>(&self, name: &'a str, mut build: F) -> Cow<'a, str>
    where
        F: FnMut(&PartMatch) -> String,
    {
        self.regex.replace_all(name, |captures: &Captures| {
            let part = PartMatch {
                coordinates: group(captures, self.groups[0]),
                indicator: group(captures, self.groups[1]),
                unused: group(captures, self.groups[2]),
                extension: group(captures, self.groups[3]),
            };
            build(&part)
        })
    }
}

fn compile(pattern: &str, required: usize) -> Result<Regex, PatternError> {
    let regex = Regex::new(pattern).map_err(|e| PatternError::InvalidRegex {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    // captures_len counts the implicit whole-match group
    let found = regex.captures_len() - 1;
    if found < required {
        return Err(PatternError::TooFewGroups {
            pattern: pattern.to_string(),
            required,
            found,
        });
    }

    debug!(pattern, groups = found, "Compiled pattern");

    Ok(regex)
}

/// Group index for each field: the named group if the pattern declares one,
/// otherwise the positional group (field N is group N + 1).
fn resolve_groups<const N: usize>(regex: &Regex, fields: [&str; N]) -> [usize; N] {
    let mut groups = [0; N];
    for (i, field) in fields.iter().enumerate() {
        groups[i] = regex
            .capture_names()
            .position(|name| name == Some(*field))
            .unwrap_or(i + 1);
    }
    groups
}

// Groups that did not take part in the match read as empty
fn group(captures: &Captures, index: usize) -> String {
    captures
        .get(index)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
