//! Progress output for user-facing status updates.
//!
//! In verbose mode output is suppressed since tracing handles everything.
//! In normal mode each rename is shown as it happens, colored when stderr is a terminal.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
    /// Renames reported so far in this batch
    renamed: usize,
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        Self::new_with_ui(false, should_use_colors())
    }

    /// Create a progress reporter that respects UI mode
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        if !colors_enabled {
            colored::control::set_override(false);
        }
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
            renamed: 0,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
            renamed: 0,
        }
    }

    /// Create a silent progress reporter
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
            renamed: 0,
        }
    }

    /// Report the start of a batch
    pub fn batch_start(&mut self, description: &str, target: &Path) {
        self.renamed = 0;
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                description.bold(),
                format!("in {}", target.display()).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "{} in {}", description, target.display());
        }
    }

    /// Report a rename that was carried out
    pub fn renamed(&mut self, from: &str, to: &str) {
        self.renamed += 1;
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}]", self.renamed);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}] {} -> {}", self.renamed, from, to);
        }
    }

    /// Report a rename that a dry run would carry out
    pub fn dry_run_rename(&mut self, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                "Dry-Run rename:".yellow(),
                from.dimmed(),
                "→".yellow(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "Dry-Run rename: {}  -->  {}", from, to);
        }
    }

    /// Report a rename left out because its destination is taken
    pub fn skipped_existing(&mut self, from: &str, to: &str) {
        self.warn(&format!("'{}' already exists, not renaming '{}'", to, from));
    }

    /// Report an error during operation (non-fatal)
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }

    /// Report undo log written
    pub fn log_written(&mut self, path: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Undo log written to: {}", path.display()).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "Undo log written to: {}", path.display());
        }
    }

    /// Report a batch that renamed nothing
    pub fn no_changes(&mut self) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", "No changes detected".dimmed());
        } else {
            let _ = writeln!(self.writer, "No changes detected");
        }
    }

    /// Report that there is no undo log to apply
    pub fn undo_log_missing(&mut self, path: &Path) {
        if self.silent {
            return;
        }
        let message = format!("No undo log found at {}, nothing to undo", path.display());
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", message.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", message);
        }
    }

    /// Report starting an undo
    pub fn undo_start(&mut self, total: usize) {
        if self.silent {
            return;
        }
        let message = format!("Undoing {} renames from log", total);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", message.bold());
        } else {
            let _ = writeln!(self.writer, "{}", message);
        }
    }

    /// Report progress on a single undo
    pub fn undo_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {} -> {}", current, total, from, to);
        }
    }

    /// Report undo complete
    pub fn undo_complete(&mut self, restored: usize, missing: usize) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "✓".green().bold(),
                format!("{} files restored", restored).green()
            );
        } else {
            let _ = writeln!(self.writer, "Undo complete. {} files restored.", restored);
        }
        if missing > 0 {
            let _ = writeln!(
                self.writer,
                "  {} logged files were not present and were skipped",
                missing
            );
        }
    }
}
