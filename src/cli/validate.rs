use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::input::loader::load_dataset_or_empty;
use crate::input::path_display;
use crate::query::filter::Filter;
use crate::report::build_summary;
use crate::report::text::render_report;
use crate::report::tsv::{write_row_issues, write_validate};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input data file (whitespace-separated temperature, growth rate, bacteria code)
    #[arg(long)]
    input: PathBuf,

    /// Optional output directory for validate.tsv and row_issues.tsv
    #[arg(long)]
    out: Option<PathBuf>,
}

/// A missing or unreadable input is reported, not treated as a failure.
pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    info!(stage = "load", path = %path_display(&args.input), "starting stage");
    let (outcome, load_error) = load_dataset_or_empty(&args.input);
    info!(
        stage = "load",
        elapsed_ms = start.elapsed().as_millis(),
        valid = outcome.valid_row_count(),
        invalid = outcome.invalid_row_count(),
        "finished stage"
    );

    let summary = build_summary(
        &args.input.to_string_lossy(),
        &outcome,
        load_error.as_ref(),
        &Filter::none(),
        &outcome.dataset,
        &[],
    );

    if let Some(out) = &args.out {
        std::fs::create_dir_all(out)?;
        write_validate(out, &summary.input)?;
        write_row_issues(out, &outcome.issues)?;
    }

    print!("{}", render_report(&summary));
    Ok(())
}
