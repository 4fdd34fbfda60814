use crate::execute::ExecutionReport;
use crate::plan::{PreviewRow, SeriesPlan};
use std::io::{self, Write};

/// Display a plan grouped by season folder
pub fn display_preview(plan: &SeriesPlan, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "Folder: {}", plan.root.display())?;
    writeln!(writer)?;

    for season in plan.seasons.iter().filter(|s| !s.is_empty()) {
        writeln!(writer, "=== {} ===", season.folder.name)?;
        for row in season.preview_rows() {
            writeln!(writer, "  {}  →  {}", row.original_name, row.new_name)?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{} files ready for rename.", plan.len())?;

    if !plan.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Run without --dry to apply these changes.")?;
    }

    Ok(())
}

/// Display a plan in a simple tab-separated format for scripting
pub fn display_preview_simple(plan: &SeriesPlan, writer: &mut impl Write) -> io::Result<()> {
    for season in &plan.seasons {
        for row in season.preview_rows() {
            writeln!(
                writer,
                "{}\t{}\t{}",
                row.season_folder, row.original_name, row.new_name
            )?;
        }
    }
    Ok(())
}

/// Display a plan as a JSON array of preview rows
pub fn display_preview_json(plan: &SeriesPlan, writer: &mut impl Write) -> io::Result<()> {
    let rows: Vec<PreviewRow<'_>> = plan.seasons.iter().flat_map(|s| s.preview_rows()).collect();
    serde_json::to_writer_pretty(&mut *writer, &rows)?;
    writeln!(writer)
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(
    report: &ExecutionReport,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{} files renamed.", report.renamed)?;

    if report.unchanged > 0 {
        writeln!(writer, "  {} already had the right name.", report.unchanged)?;
    }

    if report.has_failures() {
        writeln!(
            writer,
            "  {} of {} planned files were not renamed.",
            report.planned - report.renamed - report.unchanged,
            report.planned
        )?;
        for failure in &report.failures {
            writeln!(
                writer,
                "  [!] {} -> {}: {}",
                failure.original_name, failure.new_name, failure.error
            )?;
        }
    }

    Ok(())
}
