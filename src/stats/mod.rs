pub mod reducers;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::model::dataset::Dataset;

pub const COLD_TEMPERATURE_THRESHOLD: f64 = 20.0;
pub const HOT_TEMPERATURE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("invalid statistic: {0}")]
    UnknownStatistic(String),
}

/// Reducer output. `NoData` means the (possibly restricted) input was empty
/// and must not be read as a zero measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Count(usize),
    NoData,
}

impl StatValue {
    fn from_option(value: Option<f64>) -> Self {
        value.map_or(StatValue::NoData, StatValue::Number)
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, StatValue::NoData)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Number(v) => Some(*v),
            StatValue::Count(n) => Some(*n as f64),
            StatValue::NoData => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(v) => write!(f, "{v}"),
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::NoData => f.write_str("no data"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    MeanTemperature,
    MeanGrowthRate,
    StdTemperature,
    StdGrowthRate,
    RowCount,
    MeanColdGrowthRate,
    MeanHotGrowthRate,
}

type Reducer = fn(&Dataset) -> StatValue;

struct Entry {
    statistic: Statistic,
    key: &'static str,
    name: &'static str,
    reducer: Reducer,
}

static REGISTRY: [Entry; 7] = [
    Entry {
        statistic: Statistic::MeanTemperature,
        key: "mean-temperature",
        name: "Mean Temperature",
        reducer: mean_temperature,
    },
    Entry {
        statistic: Statistic::MeanGrowthRate,
        key: "mean-growth-rate",
        name: "Mean Growth Rate",
        reducer: mean_growth_rate,
    },
    Entry {
        statistic: Statistic::StdTemperature,
        key: "std-temperature",
        name: "Std Temperature",
        reducer: std_temperature,
    },
    Entry {
        statistic: Statistic::StdGrowthRate,
        key: "std-growth-rate",
        name: "Std Growth Rate",
        reducer: std_growth_rate,
    },
    Entry {
        statistic: Statistic::RowCount,
        key: "rows",
        name: "Data Rows",
        reducer: row_count,
    },
    Entry {
        statistic: Statistic::MeanColdGrowthRate,
        key: "mean-cold-growth-rate",
        name: "Mean Cold Growth Rate",
        reducer: mean_cold_growth_rate,
    },
    Entry {
        statistic: Statistic::MeanHotGrowthRate,
        key: "mean-hot-growth-rate",
        name: "Mean Hot Growth Rate",
        reducer: mean_hot_growth_rate,
    },
];

impl Statistic {
    pub fn ordered() -> &'static [Statistic] {
        &[
            Statistic::MeanTemperature,
            Statistic::MeanGrowthRate,
            Statistic::StdTemperature,
            Statistic::StdGrowthRate,
            Statistic::RowCount,
            Statistic::MeanColdGrowthRate,
            Statistic::MeanHotGrowthRate,
        ]
    }

    fn entry(&self) -> &'static Entry {
        &REGISTRY[*self as usize]
    }

    pub fn key(&self) -> &'static str {
        self.entry().key
    }

    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// 1-based position, matching the numbering of the statistics menu.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn compute(&self, dataset: &Dataset) -> StatValue {
        (self.entry().reducer)(dataset)
    }

    pub fn no_data_message(&self) -> String {
        match self {
            Statistic::MeanColdGrowthRate => format!(
                "No data available with temperatures below {COLD_TEMPERATURE_THRESHOLD}°C."
            ),
            Statistic::MeanHotGrowthRate => format!(
                "No data available with temperatures above {HOT_TEMPERATURE_THRESHOLD}°C."
            ),
            _ => "No data available.".to_string(),
        }
    }
}

impl FromStr for Statistic {
    type Err = StatsError;

    /// Accepts the kebab-case key, the display name (any case) or the menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        REGISTRY
            .iter()
            .find(|e| {
                e.key == wanted
                    || e.name.eq_ignore_ascii_case(wanted)
                    || wanted.parse::<usize>().ok() == Some(e.statistic.number())
            })
            .map(|e| e.statistic)
            .ok_or_else(|| StatsError::UnknownStatistic(s.to_string()))
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn compute_statistic(dataset: &Dataset, statistic: &str) -> Result<StatValue, StatsError> {
    let stat: Statistic = statistic.parse()?;
    Ok(stat.compute(dataset))
}

#[derive(Debug, Clone, Serialize)]
pub struct StatResult {
    #[serde(skip)]
    pub statistic: Statistic,
    pub key: &'static str,
    pub name: &'static str,
    pub value: StatValue,
}

pub fn compute_all(dataset: &Dataset, statistics: &[Statistic]) -> Vec<StatResult> {
    statistics
        .iter()
        .map(|s| StatResult {
            statistic: *s,
            key: s.key(),
            name: s.name(),
            value: s.compute(dataset),
        })
        .collect()
}

fn mean_temperature(dataset: &Dataset) -> StatValue {
    StatValue::from_option(reducers::mean(&dataset.temperatures()))
}

fn mean_growth_rate(dataset: &Dataset) -> StatValue {
    StatValue::from_option(reducers::mean(&dataset.growth_rates()))
}

fn std_temperature(dataset: &Dataset) -> StatValue {
    StatValue::from_option(reducers::std_dev(&dataset.temperatures()))
}

fn std_growth_rate(dataset: &Dataset) -> StatValue {
    StatValue::from_option(reducers::std_dev(&dataset.growth_rates()))
}

fn row_count(dataset: &Dataset) -> StatValue {
    StatValue::Count(dataset.len())
}

fn mean_cold_growth_rate(dataset: &Dataset) -> StatValue {
    let cold = dataset.select(|r| r.temperature() < COLD_TEMPERATURE_THRESHOLD);
    StatValue::from_option(reducers::mean(&cold.growth_rates()))
}

fn mean_hot_growth_rate(dataset: &Dataset) -> StatValue {
    let hot = dataset.select(|r| r.temperature() > HOT_TEMPERATURE_THRESHOLD);
    StatValue::from_option(reducers::mean(&hot.growth_rates()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/mod.rs"]
mod tests;
