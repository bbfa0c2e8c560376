use crate::report::Summary;
use crate::stats::{StatResult, StatValue};

pub fn render_report(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str("Bacteria Growth Report\n");
    out.push_str("======================\n\n");

    out.push_str("Input:\n");
    out.push_str(&format!("- File: {}\n", summary.input.path));
    if let Some(err) = &summary.input.error {
        out.push_str(&format!("- Error: {err}\n\n"));
    } else {
        out.push_str(&format!(
            "- Loaded {} rows of valid data\n",
            summary.input.valid_rows
        ));
        if summary.input.invalid_rows > 0 {
            out.push_str(&format!(
                "- {} invalid rows were discarded\n",
                summary.input.invalid_rows
            ));
        }
        out.push('\n');
    }

    if !summary.input.issues.is_empty() {
        out.push_str("Row errors:\n");
        for issue in &summary.input.issues {
            out.push_str(&format!("- Error in line {}: {}\n", issue.line, issue.reason));
        }
        out.push('\n');
    }

    if !summary.filter.active.is_empty() {
        out.push_str("Filters:\n");
        for f in &summary.filter.active {
            out.push_str(&format!("- {f}\n"));
        }
        out.push_str(&format!(
            "- {} data rows matching out of {}\n\n",
            summary.filter.matching_rows, summary.filter.total_rows
        ));
    }

    if !summary.statistics.is_empty() {
        out.push_str("Statistics:\n");
        for result in &summary.statistics {
            out.push_str(&format!("- {}\n", render_statistic(result)));
        }
    }

    out
}

pub fn render_statistic(result: &StatResult) -> String {
    match result.value {
        StatValue::NoData => format!("{}: {}", result.name, result.statistic.no_data_message()),
        value => format!("{}: {}", result.name, value),
    }
}
