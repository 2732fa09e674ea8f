use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// A stellar surface temperature using f64 precision.
///
/// Kelvin is the base unit. H-R diagrams plot temperature on a logarithmic
/// axis, so `log10` and `from_log10` are first-class conversions here.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let sun = Temperature::from_kelvin(5800.0);
/// let giant = sun * 0.7;
/// assert!((giant.to_kelvin() - 4060.0).abs() < 1e-9);
///
/// let hot = Temperature::from_log10(4.0);
/// assert!((hot.to_kelvin() - 10_000.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from log₁₀(T/K).
    pub fn from_log10(log_kelvin: f64) -> Self {
        Self(10f64.powf(log_kelvin))
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Returns log₁₀(T/K).
    pub fn log10(&self) -> f64 {
        self.0.log10()
    }

    /// True for a finite, strictly positive temperature.
    pub fn is_physical(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Clamp into `[min, max]` Kelvin. Never panics, see [`crate::Luminosity::clamp`].
    pub fn clamp(self, min: Temperature, max: Temperature) -> Self {
        Self(self.0.max(min.0).min(max.0))
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.0} K", self.0)
    }
}
