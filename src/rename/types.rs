use std::path::PathBuf;

/// Which renaming pipeline produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// Injects incrementing episode numbers after the season token
    EpisodeExtender,
    /// Rewrites part indicators through a substitution table
    PartIndicator,
}

impl Pipeline {
    pub fn description(&self) -> &'static str {
        match self {
            Pipeline::EpisodeExtender => "Episode count extender",
            Pipeline::PartIndicator => "Part indicator renamer",
        }
    }
}

/// A single rename, planned or performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    /// Full path to the file before renaming
    pub source_path: PathBuf,
    /// Original file name
    pub source_name: String,
    /// Full path the file is renamed to
    pub destination_path: PathBuf,
    /// New file name
    pub destination_name: String,
}

impl RenameOperation {
    pub fn new(source_path: PathBuf, destination_name: String) -> Self {
        let source_name = source_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_default();

        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination_name))
            .unwrap_or_else(|| PathBuf::from(&destination_name));

        Self {
            source_path,
            source_name,
            destination_path,
            destination_name,
        }
    }
}

/// What happened to a rename operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// File was renamed and an undo entry recorded
    Applied,
    /// Dry run: reported only
    Planned,
    /// Destination name already taken: reported only
    SkippedExisting,
}

/// Result of one batch
#[derive(Debug, Clone)]
pub struct RenameResult {
    pub pipeline: Pipeline,
    pub dry_run: bool,
    pub operations: Vec<(RenameOperation, RenameOutcome)>,
    /// Set when an undo log was written for this batch
    pub undo_log_path: Option<PathBuf>,
}

impl RenameResult {
    pub fn new(pipeline: Pipeline, dry_run: bool) -> Self {
        Self {
            pipeline,
            dry_run,
            operations: Vec::new(),
            undo_log_path: None,
        }
    }

    pub fn add_operation(&mut self, op: RenameOperation, outcome: RenameOutcome) {
        self.operations.push((op, outcome));
    }

    pub fn applied_count(&self) -> usize {
        self.count(RenameOutcome::Applied)
    }

    pub fn planned_count(&self) -> usize {
        self.count(RenameOutcome::Planned)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(RenameOutcome::SkippedExisting)
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    fn count(&self, outcome: RenameOutcome) -> usize {
        self.operations
            .iter()
            .filter(|(_, o)| *o == outcome)
            .count()
    }
}
