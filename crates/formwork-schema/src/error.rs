//! Schema configuration errors
//!
//! A malformed schema is a programming error, not user input: it is reported
//! through `Result` instead of appearing in a validation outcome.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("numeric bounds are inverted: min {min} is greater than max {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("cardinality bounds are inverted: min {min} is greater than max {max}")]
    InvertedCardinality { min: usize, max: usize },

    #[error("character length bounds are inverted: min {min} is greater than max {max}")]
    InvertedLength { min: usize, max: usize },
}
