//! User-supplied star observations and the bounds they must respect.

use serde::{Deserialize, Serialize};
use units::{Luminosity, Temperature};

use crate::error::StellarError;

/// Accepted ranges and defaults for an observation.
///
/// The defaults describe a Sun-like star and the widest range the H-R chart
/// is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationBounds {
    pub min_luminosity: Luminosity,
    pub max_luminosity: Luminosity,
    pub default_luminosity: Luminosity,
    pub min_temperature: Temperature,
    pub max_temperature: Temperature,
    pub default_temperature: Temperature,
}

impl Default for ObservationBounds {
    fn default() -> Self {
        Self {
            min_luminosity: Luminosity::from_solar_luminosities(0.0001),
            max_luminosity: Luminosity::from_solar_luminosities(1_000_000.0),
            default_luminosity: Luminosity::from_solar_luminosities(1.0),
            min_temperature: Temperature::from_kelvin(1000.0),
            max_temperature: Temperature::from_kelvin(50000.0),
            default_temperature: Temperature::from_kelvin(5800.0),
        }
    }
}

fn check_range(field: &'static str, min: f64, max: f64, default: f64) -> Result<(), StellarError> {
    let finite = min.is_finite() && max.is_finite() && default.is_finite();
    if !finite || min > max || default < min || default > max {
        return Err(StellarError::InvalidBounds {
            field,
            min,
            max,
            default,
        });
    }
    Ok(())
}

impl ObservationBounds {
    /// Reject bounds that cannot describe an input range: non-finite limits,
    /// `min > max`, or a default outside `[min, max]`.
    ///
    /// Bounds are plain data and may arrive deserialized, so the `*_within`
    /// constructors run this before using them.
    pub fn validate(&self) -> Result<(), StellarError> {
        check_range(
            "luminosity",
            self.min_luminosity.to_solar_luminosities(),
            self.max_luminosity.to_solar_luminosities(),
            self.default_luminosity.to_solar_luminosities(),
        )?;
        check_range(
            "temperature",
            self.min_temperature.to_kelvin(),
            self.max_temperature.to_kelvin(),
            self.default_temperature.to_kelvin(),
        )
    }

    /// Check a luminosity against the bounds without altering it.
    pub fn check_luminosity(&self, value: f64) -> Result<Luminosity, StellarError> {
        if !value.is_finite() {
            return Err(StellarError::InvalidLuminosity(value));
        }
        let (min, max) = (
            self.min_luminosity.to_solar_luminosities(),
            self.max_luminosity.to_solar_luminosities(),
        );
        if value < min || value > max {
            return Err(StellarError::OutOfRange {
                field: "luminosity",
                value,
                min,
                max,
            });
        }
        Ok(Luminosity::from_solar_luminosities(value))
    }

    /// Check a temperature against the bounds without altering it.
    pub fn check_temperature(&self, value: f64) -> Result<Temperature, StellarError> {
        if !value.is_finite() {
            return Err(StellarError::InvalidTemperature(value));
        }
        let (min, max) = (
            self.min_temperature.to_kelvin(),
            self.max_temperature.to_kelvin(),
        );
        if value < min || value > max {
            return Err(StellarError::OutOfRange {
                field: "temperature",
                value,
                min,
                max,
            });
        }
        Ok(Temperature::from_kelvin(value))
    }

    /// Clamp a luminosity into range. Non-finite input falls back to the default.
    pub fn clamp_luminosity(&self, value: f64) -> Luminosity {
        if !value.is_finite() {
            return self.default_luminosity;
        }
        Luminosity::from_solar_luminosities(value).clamp(self.min_luminosity, self.max_luminosity)
    }

    /// Clamp a temperature into range. Non-finite input falls back to the default.
    pub fn clamp_temperature(&self, value: f64) -> Temperature {
        if !value.is_finite() {
            return self.default_temperature;
        }
        Temperature::from_kelvin(value).clamp(self.min_temperature, self.max_temperature)
    }
}

/// A luminosity/temperature pair entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarObservation {
    pub luminosity: Luminosity,
    pub temperature: Temperature,
}

impl Default for StarObservation {
    fn default() -> Self {
        let bounds = ObservationBounds::default();
        Self {
            luminosity: bounds.default_luminosity,
            temperature: bounds.default_temperature,
        }
    }
}

impl StarObservation {
    /// Strict construction against the default bounds.
    ///
    /// # Errors
    /// Returns [`StellarError::OutOfRange`] for values outside the bounds and
    /// `InvalidLuminosity`/`InvalidTemperature` for NaN or infinities.
    pub fn new(luminosity: f64, temperature: f64) -> Result<Self, StellarError> {
        Self::within(&ObservationBounds::default(), luminosity, temperature)
    }

    /// Strict construction against custom bounds.
    pub fn within(
        bounds: &ObservationBounds,
        luminosity: f64,
        temperature: f64,
    ) -> Result<Self, StellarError> {
        bounds.validate()?;
        Ok(Self {
            luminosity: bounds.check_luminosity(luminosity)?,
            temperature: bounds.check_temperature(temperature)?,
        })
    }

    /// Number-input semantics: out-of-range values are pulled to the nearest
    /// bound instead of being rejected.
    pub fn clamped(luminosity: f64, temperature: f64) -> Self {
        Self::clamp_into(&ObservationBounds::default(), luminosity, temperature)
    }

    /// [`StarObservation::clamped`] against custom bounds.
    ///
    /// # Errors
    /// Returns [`StellarError::InvalidBounds`] when `bounds` fail
    /// [`ObservationBounds::validate`].
    pub fn clamped_within(
        bounds: &ObservationBounds,
        luminosity: f64,
        temperature: f64,
    ) -> Result<Self, StellarError> {
        bounds.validate()?;
        Ok(Self::clamp_into(bounds, luminosity, temperature))
    }

    fn clamp_into(bounds: &ObservationBounds, luminosity: f64, temperature: f64) -> Self {
        Self {
            luminosity: bounds.clamp_luminosity(luminosity),
            temperature: bounds.clamp_temperature(temperature),
        }
    }
}
