use std::path::Path;

use thiserror::Error;

use crate::input::loader::RowIssue;
use crate::model::dataset::Dataset;
use crate::report::InputSummary;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("tsv error: {0}")]
    Csv(#[from] csv::Error),
}

fn tsv_writer(path: &Path) -> Result<csv::Writer<std::fs::File>, ReportError> {
    Ok(csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?)
}

pub fn write_validate(out_dir: &Path, input: &InputSummary) -> Result<(), ReportError> {
    let mut wtr = tsv_writer(&out_dir.join("validate.tsv"))?;
    wtr.write_record(["key", "value"])?;
    let rows = [
        ("input", input.path.clone()),
        ("status", input.status.clone()),
        ("total_lines", input.total_lines.to_string()),
        ("valid_rows", input.valid_rows.to_string()),
        ("invalid_rows", input.invalid_rows.to_string()),
        ("header_skipped", input.header_skipped.to_string()),
    ];
    for (k, v) in rows {
        wtr.write_record([k, v.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_row_issues(out_dir: &Path, issues: &[RowIssue]) -> Result<(), ReportError> {
    let mut wtr = tsv_writer(&out_dir.join("row_issues.tsv"))?;
    wtr.write_record(["line", "kind", "reason"])?;
    for issue in issues {
        wtr.write_record([issue.line.to_string().as_str(), issue.kind, issue.reason.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_dataset(out_dir: &Path, file_name: &str, dataset: &Dataset) -> Result<(), ReportError> {
    let mut wtr = tsv_writer(&out_dir.join(file_name))?;
    wtr.write_record(["temperature", "growth_rate", "bacteria_code"])?;
    for record in dataset {
        wtr.write_record([
            record.temperature().to_string(),
            record.growth_rate().to_string(),
            record.bacteria().code().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
