pub mod json;
pub mod text;
pub mod tsv;

use serde::Serialize;

use crate::input::LoadError;
use crate::input::loader::{LoadOutcome, RowIssue};
use crate::model::dataset::Dataset;
use crate::query::filter::Filter;
use crate::stats::{StatResult, Statistic, compute_all};

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub filter: FilterSummary,
    pub statistics: Vec<StatResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub status: String,
    pub error: Option<String>,
    pub total_lines: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub header_skipped: bool,
    pub issues: Vec<RowIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    pub active: Vec<String>,
    pub matching_rows: usize,
    pub total_rows: usize,
}

pub fn build_summary(
    input_path: &str,
    outcome: &LoadOutcome,
    load_error: Option<&LoadError>,
    filter: &Filter,
    filtered: &Dataset,
    statistics: &[Statistic],
) -> Summary {
    Summary {
        tool: ToolSummary {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputSummary {
            path: input_path.to_string(),
            status: load_error.map_or("ok", |e| e.status()).to_string(),
            error: load_error.map(|e| e.to_string()),
            total_lines: outcome.total_lines,
            valid_rows: outcome.valid_row_count(),
            invalid_rows: outcome.invalid_row_count(),
            header_skipped: outcome.header_skipped(),
            issues: outcome.issues.clone(),
        },
        filter: FilterSummary {
            active: filter.describe(),
            matching_rows: filtered.len(),
            total_rows: outcome.dataset.len(),
        },
        statistics: compute_all(filtered, statistics),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
