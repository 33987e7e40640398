use crate::domain::model::{Assignment, Person};
use crate::report::naming::CONTENT_TIMESTAMP_FORMAT;
use crate::report::{ensure_exportable, ReportExporter};
use crate::utils::error::Result;
use chrono::NaiveDateTime;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const CSV_HEADER: [&str; 6] = [
    "reviewer_name",
    "reviewer_id",
    "reviewee_names",
    "reviewee_ids",
    "reviewee_count",
    "timestamp",
];

/// One row per reviewer, BOM-prefixed so spreadsheet tools detect UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ReportExporter for CsvExporter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn default_prefix(&self) -> &'static str {
        "code_review_assignments"
    }

    fn render(&self, assignment: &Assignment, generated_at: NaiveDateTime) -> Result<Vec<u8>> {
        ensure_exportable(assignment, "CSV")?;

        let timestamp = generated_at.format(CONTENT_TIMESTAMP_FORMAT).to_string();
        let mut buffer = UTF8_BOM.to_vec();
        {
            let mut writer = csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(&mut buffer);
            writer.write_record(CSV_HEADER)?;

            for (reviewer, reviewees) in assignment.iter() {
                let names: Vec<&str> = reviewees.iter().map(Person::name).collect();
                let ids: Vec<&str> = reviewees.iter().map(Person::employee_id).collect();
                let names = names.join(";");
                let ids = ids.join(";");
                let count = reviewees.len().to_string();
                writer.write_record([
                    reviewer.name(),
                    reviewer.employee_id(),
                    names.as_str(),
                    ids.as_str(),
                    count.as_str(),
                    timestamp.as_str(),
                ])?;
            }
            writer.flush()?;
        }

        tracing::debug!("Rendered {} CSV rows", assignment.len());
        Ok(buffer)
    }
}
