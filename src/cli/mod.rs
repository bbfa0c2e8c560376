use clap::{Args, Parser, Subcommand};

use crate::config::AnalysisConfig;
use crate::model::record::BacteriaCode;

mod plot;
mod run;
mod stats;
mod validate;

#[derive(Parser, Debug)]
#[command(name = "bacteria-growth", version, about = "Bacteria growth data CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Validate(validate::ValidateArgs),
    Stats(stats::StatsArgs),
    Plot(plot::PlotArgs),
    Run(run::RunArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Validate(args) => validate::handle(args),
            Command::Stats(args) => stats::handle(args),
            Command::Plot(args) => plot::handle(args),
            Command::Run(args) => run::handle(args),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Keep only this bacteria code (1-4)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub(crate) bacteria: Option<u8>,

    /// Inclusive lower bound on growth rate
    #[arg(long)]
    pub(crate) growth_min: Option<f64>,

    /// Inclusive upper bound on growth rate
    #[arg(long)]
    pub(crate) growth_max: Option<f64>,

    /// Optional TOML analysis file ([filter] table and statistics list)
    #[arg(long)]
    pub(crate) config: Option<std::path::PathBuf>,
}

impl FilterArgs {
    pub(crate) fn resolve(&self, statistics: &[String]) -> anyhow::Result<AnalysisConfig> {
        let base = match &self.config {
            Some(path) => AnalysisConfig::load(path)?,
            None => AnalysisConfig::default(),
        };
        let cfg = base.merge_overrides(
            self.bacteria.and_then(BacteriaCode::from_code),
            self.growth_min,
            self.growth_max,
            statistics,
        );
        cfg.filter()?;
        cfg.statistics()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
