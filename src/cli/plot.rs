use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::charts::{chart_data, write_charts};
use crate::cli::FilterArgs;
use crate::input::loader::load_dataset;

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Input data file
    #[arg(long)]
    input: PathBuf,

    /// Output directory for charts.json
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    filter: FilterArgs,
}

pub fn handle(args: PlotArgs) -> anyhow::Result<()> {
    let filter = args.filter.resolve(&[])?.filter()?;
    std::fs::create_dir_all(&args.out)?;

    let outcome = load_dataset(&args.input)?;
    let filtered = filter.apply(&outcome.dataset);
    let charts = chart_data(&filtered);
    for series in &charts.growth {
        info!(
            bacteria = series.name,
            points = series.points.len(),
            slope = ?series.trend.as_ref().map(|t| t.slope),
            "growth series"
        );
    }
    write_charts(&args.out, &charts)
}
