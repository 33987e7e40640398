//! Rendering of finished assignments: console table, CSV and Markdown files.

pub mod console;
pub mod csv_report;
pub mod markdown;
pub mod naming;

use crate::domain::model::{Assignment, OutputFormat};
use crate::utils::error::{Result, RosterError};
use chrono::NaiveDateTime;

pub use csv_report::CsvExporter;
pub use markdown::MarkdownExporter;

/// A file report built from an assignment.
pub trait ReportExporter: Send + Sync {
    fn extension(&self) -> &'static str;
    /// File name prefix used when the output path is a directory.
    fn default_prefix(&self) -> &'static str;
    fn render(&self, assignment: &Assignment, generated_at: NaiveDateTime) -> Result<Vec<u8>>;
}

/// File exporter for `format`; `None` for console output.
pub fn exporter_for(format: OutputFormat) -> Option<Box<dyn ReportExporter>> {
    match format {
        OutputFormat::Console => None,
        OutputFormat::Csv => Some(Box::new(CsvExporter)),
        OutputFormat::Markdown => Some(Box::new(MarkdownExporter)),
    }
}

pub(crate) fn ensure_exportable(assignment: &Assignment, format_name: &str) -> Result<()> {
    if assignment.is_empty() {
        return Err(RosterError::export(format!(
            "{} export: assignment is empty",
            format_name
        )));
    }
    Ok(())
}
