//! Typed failures raised by the generators

use thiserror::Error;

use crate::Family;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("Unknown {family} series: {key}")]
    UnknownSeries { family: Family, key: String },

    #[error("No {family} footprint specs found for {key}")]
    UnknownFootprint { family: Family, key: String },

    #[error("No drawing for {property} = \"{value}\"")]
    UnknownDiscriminator { property: String, value: String },

    #[error("Unsupported number of rows: {0} (expected 1 or 2)")]
    UnsupportedRowCount(u32),

    #[error("Number of pad numbers ({got}) does not match number of pads ({expected})")]
    PadCountMismatch { expected: usize, got: usize },

    #[error("Invalid value: {0}")]
    MalformedValue(String),

    #[error("Value {value} is out of range [{min}, {max}]")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Missing property: {0}")]
    MissingProperty(String),
}
