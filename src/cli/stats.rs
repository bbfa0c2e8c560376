use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::FilterArgs;
use crate::input::loader::load_dataset;
use crate::input::path_display;
use crate::report::text::render_statistic;
use crate::stats::compute_all;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Input data file
    #[arg(long)]
    input: PathBuf,

    /// Statistic key, display name or menu number; repeatable (default: all)
    #[arg(long = "statistic", short = 's')]
    pub(crate) statistics: Vec<String>,

    #[command(flatten)]
    pub(crate) filter: FilterArgs,
}

pub fn handle(args: StatsArgs) -> anyhow::Result<()> {
    let cfg = args.filter.resolve(&args.statistics)?;
    let filter = cfg.filter()?;
    let statistics = cfg.statistics()?;

    let outcome = load_dataset(&args.input)?;
    let filtered = filter.apply(&outcome.dataset);
    info!(
        path = %path_display(&args.input),
        matching = filtered.len(),
        total = outcome.dataset.len(),
        "data rows matching"
    );

    for result in compute_all(&filtered, &statistics) {
        println!("{}", render_statistic(&result));
    }
    Ok(())
}
