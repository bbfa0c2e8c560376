//! Data behind the two charts: bacteria counts (bar) and growth rate by
//! temperature (scatter with a linear trend per bacteria). Rendering is left
//! to whatever consumes `charts.json`.

use std::path::Path;

use serde::Serialize;

use crate::model::dataset::Dataset;
use crate::model::record::{BacteriaCode, TEMPERATURE_MAX, TEMPERATURE_MIN};
use crate::report::json::write_json;
use crate::stats::reducers::linear_fit;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountBar {
    pub code: u8,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trendline {
    pub slope: f64,
    pub intercept: f64,
}

impl Trendline {
    pub fn at(&self, temperature: f64) -> f64 {
        self.slope * temperature + self.intercept
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSeries {
    pub code: u8,
    pub name: &'static str,
    pub color: &'static str,
    /// `(temperature, growth_rate)` sorted by temperature.
    pub points: Vec<(f64, f64)>,
    pub trend: Option<Trendline>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub counts_title: &'static str,
    pub counts: Vec<CountBar>,
    pub growth_title: &'static str,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub growth: Vec<GrowthSeries>,
}

/// One bar per bacteria present, in code order.
pub fn bacteria_counts(dataset: &Dataset) -> Vec<CountBar> {
    BacteriaCode::ordered()
        .iter()
        .map(|code| CountBar {
            code: code.code(),
            name: code.name(),
            count: dataset.count_by_bacteria(*code),
        })
        .filter(|bar| bar.count > 0)
        .collect()
}

pub fn growth_series(dataset: &Dataset) -> Vec<GrowthSeries> {
    let mut out = Vec::new();
    for code in BacteriaCode::ordered() {
        let mut points: Vec<(f64, f64)> = dataset
            .iter()
            .filter(|r| r.bacteria() == *code)
            .map(|r| (r.temperature(), r.growth_rate()))
            .collect();
        if points.is_empty() {
            continue;
        }
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
        let trend = linear_fit(&xs, &ys).map(|(slope, intercept)| Trendline { slope, intercept });
        out.push(GrowthSeries {
            code: code.code(),
            name: code.name(),
            color: code.color(),
            points,
            trend,
        });
    }
    out
}

pub fn chart_data(dataset: &Dataset) -> ChartData {
    ChartData {
        counts_title: "Number of Bacteria",
        counts: bacteria_counts(dataset),
        growth_title: "Growth Rate by Temperature",
        x_axis: Axis {
            label: "Temperature (°C)",
            min: Some(TEMPERATURE_MIN),
            max: Some(TEMPERATURE_MAX),
        },
        y_axis: Axis {
            label: "Growth Rate",
            min: Some(0.0),
            max: None,
        },
        growth: growth_series(dataset),
    }
}

pub fn write_charts(out_dir: &Path, charts: &ChartData) -> anyhow::Result<()> {
    write_json(out_dir, "charts.json", charts)
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/mod.rs"]
mod tests;
