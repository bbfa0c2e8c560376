use std::fmt;

use crate::model::dataset::Dataset;
use crate::model::record::{BacteriaCode, Record};

/// Inclusive growth-rate window. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GrowthRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl GrowthRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, growth_rate: f64) -> bool {
        self.min.is_none_or(|lo| growth_rate >= lo) && self.max.is_none_or(|hi| growth_rate <= hi)
    }
}

impl fmt::Display for GrowthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => write!(f, "[{lo}, {hi}]"),
            (Some(lo), None) => write!(f, "[{lo}, inf)"),
            (None, Some(hi)) => write!(f, "(-inf, {hi}]"),
            (None, None) => write!(f, "(-inf, inf)"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Filter {
    pub bacteria: Option<BacteriaCode>,
    pub growth_range: Option<GrowthRange>,
}

impl Filter {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_bacteria(mut self, code: BacteriaCode) -> Self {
        self.bacteria = Some(code);
        self
    }

    pub fn with_growth_range(mut self, range: GrowthRange) -> Self {
        self.growth_range = Some(range);
        self
    }

    pub fn is_active(&self) -> bool {
        self.bacteria.is_some() || self.growth_range.is_some_and(|r| !r.is_unbounded())
    }

    pub fn matches(&self, record: &Record) -> bool {
        if let Some(code) = self.bacteria {
            if record.bacteria() != code {
                return false;
            }
        }
        if let Some(range) = self.growth_range {
            if !range.contains(record.growth_rate()) {
                return false;
            }
        }
        true
    }

    /// Returns the ordered subsequence of `dataset` that passes every active predicate.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        if !self.is_active() {
            return dataset.clone();
        }
        dataset.select(|r| self.matches(r))
    }

    pub fn describe(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(code) = self.bacteria {
            out.push(format!("Bacteria Filter: {code}"));
        }
        if let Some(range) = self.growth_range.filter(|r| !r.is_unbounded()) {
            out.push(format!("Growth Rate Filter: {range}"));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/query/filter.rs"]
mod tests;
