//! Mass-luminosity relation.

use units::{Luminosity, Mass};

use crate::error::StellarError;

/// Exponent of the main-sequence relation L ∝ M^3.5
pub const MASS_LUMINOSITY_EXPONENT: f64 = 3.5;

/// Estimate stellar mass from luminosity.
///
/// Inverts L = M^3.5, so M = L^(1/3.5) in solar units. Temperature plays no
/// part. The relation is only meaningful on the main sequence but is applied
/// to any input.
///
/// # Errors
/// [`StellarError::InvalidLuminosity`] if the luminosity is not positive and
/// finite.
///
/// # Example
/// ```
/// use stellar::estimate_mass;
/// use units::Luminosity;
///
/// let mass = estimate_mass(Luminosity::solar()).unwrap();
/// assert_eq!(mass.to_solar_masses(), 1.0);
/// ```
pub fn estimate_mass(luminosity: Luminosity) -> Result<Mass, StellarError> {
    if !luminosity.is_physical() {
        return Err(StellarError::InvalidLuminosity(
            luminosity.to_solar_luminosities(),
        ));
    }
    Ok(Mass::from_solar_masses(
        luminosity.powf(1.0 / MASS_LUMINOSITY_EXPONENT),
    ))
}
