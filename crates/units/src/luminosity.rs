use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// Nominal solar luminosity in erg/s (IAU 2015 B3)
pub const SOLAR_LUMINOSITY_ERG_S: f64 = 3.828e33;

/// A bolometric luminosity using f64 precision.
///
/// Solar luminosities (L☉) are the base unit. Values on an H-R diagram span
/// ten orders of magnitude, so most callers move through `log10`.
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::solar();
/// let giant = sun * 100.0;
/// assert_eq!(giant.to_solar_luminosities(), 100.0);
/// assert!((giant.log10() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Luminosity(f64); // Base unit: solar luminosities

impl Luminosity {
    /// Creates a new `Luminosity` from a value in solar luminosities.
    pub fn from_solar_luminosities(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from log₁₀(L/L☉).
    pub fn from_log10(log_solar: f64) -> Self {
        Self(10f64.powf(log_solar))
    }

    /// Creates a new `Luminosity` from a value in erg/s.
    pub fn from_erg_per_sec(value: f64) -> Self {
        Self(value / SOLAR_LUMINOSITY_ERG_S)
    }

    /// One solar luminosity.
    pub fn solar() -> Self {
        Self(1.0)
    }

    pub fn to_solar_luminosities(&self) -> f64 {
        self.0
    }

    pub fn to_erg_per_sec(&self) -> f64 {
        self.0 * SOLAR_LUMINOSITY_ERG_S
    }

    /// Returns log₁₀(L/L☉).
    pub fn log10(&self) -> f64 {
        self.0.log10()
    }

    /// Power function on the dimensionless solar-unit value
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }

    /// True for a finite, strictly positive luminosity.
    pub fn is_physical(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Clamp into `[min, max]` solar luminosities.
    ///
    /// Unlike `f64::clamp` this never panics: with `min > max` the result is
    /// `max`, and a NaN bound is ignored.
    pub fn clamp(self, min: Luminosity, max: Luminosity) -> Self {
        Self(self.0.max(min.0).min(max.0))
    }
}

impl Mul<f64> for Luminosity {
    type Output = Luminosity;

    fn mul(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 * rhs)
    }
}

impl Div<f64> for Luminosity {
    type Output = Luminosity;

    fn div(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 / rhs)
    }
}

impl fmt::Display for Luminosity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} L☉", self.0)
    }
}
