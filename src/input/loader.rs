use std::io::BufRead;
use std::path::Path;

use serde::Serialize;
use tracing::{error, warn};

use crate::input::{LoadError, open_reader, path_display};
use crate::model::dataset::Dataset;
use crate::model::record::{Record, RowError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowIssue {
    pub line: usize,
    pub kind: &'static str,
    pub reason: String,
}

impl RowIssue {
    fn new(line: usize, err: &RowError) -> Self {
        Self {
            line,
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}

/// Result of a best-effort load: valid rows become records, everything else
/// is described in `issues`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    pub issues: Vec<RowIssue>,
    pub total_lines: usize,
}

impl LoadOutcome {
    pub fn valid_row_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn invalid_row_count(&self) -> usize {
        self.issues.len()
    }

    pub fn header_skipped(&self) -> bool {
        self.issues.first().is_some_and(|i| i.kind == "header")
    }
}

pub fn load_dataset(path: &Path) -> Result<LoadOutcome, LoadError> {
    let reader = open_reader(path)?;
    let outcome = read_records(reader)?;
    for issue in &outcome.issues {
        warn!(
            path = %path_display(path),
            line = issue.line,
            kind = issue.kind,
            "{}",
            issue.reason
        );
    }
    Ok(outcome)
}

/// Like [`load_dataset`], but a failed load degrades to an empty outcome.
/// The error is still handed back so callers can tell "missing" from "empty".
pub fn load_dataset_or_empty(path: &Path) -> (LoadOutcome, Option<LoadError>) {
    match load_dataset(path) {
        Ok(outcome) => (outcome, None),
        Err(err) => {
            error!(path = %path_display(path), status = err.status(), "{err}");
            (LoadOutcome::default(), Some(err))
        }
    }
}

pub fn read_records<R: BufRead>(mut reader: R) -> Result<LoadOutcome, std::io::Error> {
    let mut records = Vec::new();
    let mut issues = Vec::new();
    let mut line = String::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let value = line.trim_end_matches(['\n', '\r']);

        if line_no == 1 && !value.chars().any(|c| c.is_ascii_digit()) {
            let err = RowError::Header(value.trim().to_string());
            issues.push(RowIssue::new(line_no, &err));
            continue;
        }

        match parse_line(value) {
            Ok(record) => records.push(record),
            Err(err) => issues.push(RowIssue::new(line_no, &err)),
        }
    }

    Ok(LoadOutcome {
        dataset: Dataset::from(records),
        issues,
        total_lines: line_no,
    })
}

pub fn parse_line(line: &str) -> Result<Record, RowError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(RowError::FieldCount(tokens.len()));
    }
    let temperature = parse_field(tokens[0], "temperature")?;
    let growth_rate = parse_field(tokens[1], "growth rate")?;
    let bacteria_code = parse_field(tokens[2], "bacteria code")?;
    Record::new(temperature, growth_rate, bacteria_code)
}

fn parse_field(token: &str, field: &'static str) -> Result<f64, RowError> {
    token.parse::<f64>().map_err(|_| RowError::NotNumeric {
        field,
        token: token.to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/loader.rs"]
mod tests;
