use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TEMPERATURE_MIN: f64 = 10.0;
pub const TEMPERATURE_MAX: f64 = 60.0;
pub const GROWTH_RATE_MIN: f64 = 0.0;

/// Reason a single data row was rejected by the loader.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("Looks like a header ({0})")]
    Header(String),
    #[error("Expected 3 values (temperature, growth rate, bacteria code). Found: {0}.")]
    FieldCount(usize),
    #[error("Could not parse {field} as a number. Found: '{token}'.")]
    NotNumeric { field: &'static str, token: String },
    #[error("Invalid temperature. It must be between 10 and 60 degrees. Found: {0}.")]
    Temperature(f64),
    #[error("Invalid growth rate. It must be a positive number. Found: {0}.")]
    GrowthRate(f64),
    #[error("Invalid bacteria code. It must be 1, 2, 3, or 4. Found: {0}.")]
    BacteriaCode(f64),
}

impl RowError {
    pub fn kind(&self) -> &'static str {
        match self {
            RowError::Header(_) => "header",
            RowError::FieldCount(_) => "field_count",
            RowError::NotNumeric { .. } => "not_numeric",
            RowError::Temperature(_) => "temperature",
            RowError::GrowthRate(_) => "growth_rate",
            RowError::BacteriaCode(_) => "bacteria_code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BacteriaCode {
    SalmonellaEnterica = 1,
    BacillusCereus = 2,
    Listeria = 3,
    BrochothrixThermosphacta = 4,
}

impl BacteriaCode {
    pub fn ordered() -> &'static [BacteriaCode] {
        &[
            BacteriaCode::SalmonellaEnterica,
            BacteriaCode::BacillusCereus,
            BacteriaCode::Listeria,
            BacteriaCode::BrochothrixThermosphacta,
        ]
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(BacteriaCode::SalmonellaEnterica),
            2 => Some(BacteriaCode::BacillusCereus),
            3 => Some(BacteriaCode::Listeria),
            4 => Some(BacteriaCode::BrochothrixThermosphacta),
            _ => None,
        }
    }

    /// Accepts integral values only, so `2.0` maps to a code but `2.5` does not.
    pub fn from_value(value: f64) -> Option<Self> {
        if value.fract() != 0.0 || !(1.0..=4.0).contains(&value) {
            return None;
        }
        Self::from_code(value as u8)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BacteriaCode::SalmonellaEnterica => "Salmonella enterica",
            BacteriaCode::BacillusCereus => "Bacillus cereus",
            BacteriaCode::Listeria => "Listeria",
            BacteriaCode::BrochothrixThermosphacta => "Brochothrix thermosphacta",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BacteriaCode::SalmonellaEnterica => "blue",
            BacteriaCode::BacillusCereus => "orange",
            BacteriaCode::Listeria => "green",
            BacteriaCode::BrochothrixThermosphacta => "red",
        }
    }
}

impl fmt::Display for BacteriaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.name())
    }
}

impl TryFrom<u8> for BacteriaCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_code(value).ok_or_else(|| format!("unknown bacteria code {value}"))
    }
}

impl From<BacteriaCode> for u8 {
    fn from(value: BacteriaCode) -> Self {
        value.code()
    }
}

/// One validated observation. Fields are private so every `Record` in
/// circulation has passed [`Record::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record {
    temperature: f64,
    growth_rate: f64,
    bacteria: BacteriaCode,
}

impl Record {
    pub fn new(temperature: f64, growth_rate: f64, bacteria_code: f64) -> Result<Self, RowError> {
        if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature) {
            return Err(RowError::Temperature(temperature));
        }
        if !growth_rate.is_finite() || growth_rate < GROWTH_RATE_MIN {
            return Err(RowError::GrowthRate(growth_rate));
        }
        let bacteria =
            BacteriaCode::from_value(bacteria_code).ok_or(RowError::BacteriaCode(bacteria_code))?;
        Ok(Self {
            temperature,
            growth_rate,
            bacteria,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    pub fn bacteria(&self) -> BacteriaCode {
        self.bacteria
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
