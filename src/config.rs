use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::record::BacteriaCode;
use crate::query::filter::{Filter, GrowthRange};
use crate::stats::{Statistic, StatsError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Statistic(#[from] StatsError),
    #[error("growth rate bounds are inverted: min {min} > max {max}")]
    InvertedRange { min: f64, max: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    pub bacteria: Option<BacteriaCode>,
    pub growth_min: Option<f64>,
    pub growth_max: Option<f64>,
}

/// Analysis settings read from a TOML file:
///
/// ```toml
/// statistics = ["mean-growth-rate", "Data Rows"]
///
/// [filter]
/// bacteria = 2
/// growth_min = 0.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub filter: FilterSection,
    #[serde(default)]
    pub statistics: Vec<String>,
}

impl AnalysisConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: AnalysisConfig = toml::from_str(text)?;
        cfg.filter()?;
        cfg.statistics()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Layers command-line overrides on top of the file values.
    pub fn merge_overrides(
        mut self,
        bacteria: Option<BacteriaCode>,
        growth_min: Option<f64>,
        growth_max: Option<f64>,
        statistics: &[String],
    ) -> Self {
        if bacteria.is_some() {
            self.filter.bacteria = bacteria;
        }
        if growth_min.is_some() {
            self.filter.growth_min = growth_min;
        }
        if growth_max.is_some() {
            self.filter.growth_max = growth_max;
        }
        if !statistics.is_empty() {
            self.statistics = statistics.to_vec();
        }
        self
    }

    pub fn filter(&self) -> Result<Filter, ConfigError> {
        let section = &self.filter;
        if let (Some(min), Some(max)) = (section.growth_min, section.growth_max) {
            if min > max {
                return Err(ConfigError::InvertedRange { min, max });
            }
        }
        let range = GrowthRange::new(section.growth_min, section.growth_max);
        Ok(Filter {
            bacteria: section.bacteria,
            growth_range: (!range.is_unbounded()).then_some(range),
        })
    }

    /// Requested statistics in order; every statistic when none are listed.
    pub fn statistics(&self) -> Result<Vec<Statistic>, ConfigError> {
        if self.statistics.is_empty() {
            return Ok(Statistic::ordered().to_vec());
        }
        let mut out = Vec::with_capacity(self.statistics.len());
        for name in &self.statistics {
            out.push(name.parse::<Statistic>()?);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config/mod.rs"]
mod tests;
