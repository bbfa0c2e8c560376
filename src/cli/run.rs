use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::charts::{chart_data, write_charts};
use crate::cli::FilterArgs;
use crate::input::loader::load_dataset;
use crate::input::path_display;
use crate::report::build_summary;
use crate::report::json::write_summary;
use crate::report::text::render_report;
use crate::report::tsv::{write_dataset, write_row_issues, write_validate};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input data file
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Statistic key, display name or menu number; repeatable (default: all)
    #[arg(long = "statistic", short = 's')]
    statistics: Vec<String>,

    #[command(flatten)]
    filter: FilterArgs,
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    let cfg = args.filter.resolve(&args.statistics)?;
    let filter = cfg.filter()?;
    let statistics = cfg.statistics()?;
    std::fs::create_dir_all(&args.out)?;

    let start = Instant::now();
    info!(stage = "load", path = %path_display(&args.input), "starting stage");
    let outcome = load_dataset(&args.input)?;
    info!(
        stage = "load",
        elapsed_ms = start.elapsed().as_millis(),
        valid = outcome.valid_row_count(),
        invalid = outcome.invalid_row_count(),
        "finished stage"
    );
    write_row_issues(&args.out, &outcome.issues)?;

    let start = Instant::now();
    info!(stage = "filter", "starting stage");
    let filtered = filter.apply(&outcome.dataset);
    for line in filter.describe() {
        info!(stage = "filter", "{line}");
    }
    write_dataset(&args.out, "filtered.tsv", &filtered)?;
    info!(
        stage = "filter",
        elapsed_ms = start.elapsed().as_millis(),
        matching = filtered.len(),
        total = outcome.dataset.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "charts", "starting stage");
    write_charts(&args.out, &chart_data(&filtered))?;
    info!(
        stage = "charts",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "report", "starting stage");
    let summary = build_summary(
        &args.input.to_string_lossy(),
        &outcome,
        None,
        &filter,
        &filtered,
        &statistics,
    );
    write_validate(&args.out, &summary.input)?;
    write_summary(&args.out, &summary)?;
    let report = render_report(&summary);
    std::fs::write(args.out.join("report.txt"), &report)?;
    info!(
        stage = "report",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    Ok(())
}
