use crate::rename::{RenameOutcome, RenameResult};
use crate::revert::UndoResult;
use std::io::{self, Write};

/// Display dry run results in a formatted output
pub fn display_dry_run(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Pipeline:   {}", result.pipeline.description())?;
    writeln!(writer, "Operations: {}", result.operations.len())?;
    writeln!(writer)?;

    if result.operations.is_empty() {
        writeln!(writer, "No files to rename.")?;
        return Ok(());
    }

    writeln!(writer, "Planned changes:")?;
    writeln!(writer)?;

    for (i, (op, outcome)) in result.operations.iter().enumerate() {
        writeln!(writer, "  {}. From: {}", i + 1, op.source_name)?;
        writeln!(writer, "     To:   {}", op.destination_name)?;

        if *outcome == RenameOutcome::SkippedExisting {
            writeln!(writer, "     [!] Destination already exists, would be skipped")?;
        }

        writeln!(writer)?;
    }

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(
        writer,
        "  {} files would be renamed",
        result.planned_count()
    )?;

    let skipped = result.skipped_count();
    if skipped > 0 {
        writeln!(writer, "  {} files skipped, destination exists", skipped)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Run without --dry-run to apply these changes.")?;

    Ok(())
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "Successfully renamed {} files.",
        result.applied_count()
    )?;

    let skipped = result.skipped_count();
    if skipped > 0 {
        writeln!(writer, "  {} files skipped, destination exists.", skipped)?;
    }

    if let Some(path) = &result.undo_log_path {
        writeln!(writer, "  Undo log: {}", path.display())?;
    }

    Ok(())
}

/// Display the outcome of applying an undo log
pub fn display_undo_result(result: &UndoResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;

    if !result.log_found {
        writeln!(writer, "No undo log found, nothing to undo.")?;
        return Ok(());
    }

    writeln!(writer, "Restored {} files.", result.restored.len())?;

    if !result.missing.is_empty() {
        writeln!(
            writer,
            "  {} logged files were not present:",
            result.missing.len()
        )?;
        for name in &result.missing {
            writeln!(writer, "    - {}", name)?;
        }
    }

    Ok(())
}
