//! Error types for stellar computations.

use thiserror::Error;

/// Rejected inputs to the mass estimator, the path planner, or observation
/// construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StellarError {
    /// Luminosity is zero, negative, or not finite
    #[error("luminosity must be positive and finite, got {0}")]
    InvalidLuminosity(f64),

    /// Temperature is zero, negative, or not finite
    #[error("temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    /// Mass is zero, negative, or not finite
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    /// Value lies outside the accepted observation bounds
    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Observation bounds are inverted, not finite, or exclude their default
    #[error("invalid {field} bounds [{min}, {max}] with default {default}")]
    InvalidBounds {
        field: &'static str,
        min: f64,
        max: f64,
        default: f64,
    },
}
