use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Invalid mapping JSON: {0}")]
    InvalidJson(String),
}

/// Substitution table from arbitrary part indicators to the ones Jellyfin understands
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PartMapping {
    entries: HashMap<String, String>,
}

impl PartMapping {
    /// Parse a JSON object of string keys to string values, e.g. `{"A": "-part-1"}`
    pub fn from_json(json: &str) -> Result<Self, MappingError> {
        serde_json::from_str(json).map_err(|e| MappingError::InvalidJson(e.to_string()))
    }

    /// Mapped indicator, or the indicator itself when it has no entry
    pub fn substitute<'a>(&'a self, indicator: &'a str) -> &'a str {
        self.entries
            .get(indicator)
            .map(String::as_str)
            .unwrap_or(indicator)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for PartMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
