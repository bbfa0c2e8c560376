pub mod charts;
pub mod cli;
pub mod config;
pub mod input;
pub mod model;
pub mod query;
pub mod report;
pub mod stats;

pub mod prelude {
    pub use crate::input::loader::{LoadOutcome, load_dataset};
    pub use crate::model::dataset::Dataset;
    pub use crate::model::record::{BacteriaCode, Record};
    pub use crate::query::filter::{Filter, GrowthRange};
    pub use crate::stats::{StatValue, Statistic, compute_statistic};
}
