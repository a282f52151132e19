use crate::core::models::record::UnsupportedPropertyError;
use crate::core::models::species::{SpeciesKey, SpeciesSpec};
use thiserror::Error;

/// Failure to map a requested species onto dataset content.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error("No record for species {spec} in dataset '{dataset}'")]
    SpeciesNotFound { dataset: String, spec: SpeciesSpec },

    #[error(
        "Cannot interpolate species {spec} in dataset '{dataset}': missing bracketing record {missing}"
    )]
    InterpolationRange {
        dataset: String,
        spec: SpeciesSpec,
        missing: SpeciesKey,
    },
}

/// Failure of a property query on a constructed promolecule.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    #[error(transparent)]
    UnsupportedProperty(#[from] UnsupportedPropertyError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Logarithm of non-positive field value {value:e} at point index {point_index}")]
    NonPositiveLog { point_index: usize, value: f64 },
}
