//! Strongly typed physical quantities for H-R diagram work.
//!
//! Each quantity wraps an `f64` in its astrophysical base unit: Kelvin for
//! temperature, solar masses for mass, solar luminosities for luminosity.

pub mod luminosity;
pub mod mass;
pub mod temperature;

#[cfg(test)]
mod temperature_test;

pub use luminosity::{Luminosity, SOLAR_LUMINOSITY_ERG_S};
pub use mass::{Mass, SOLAR_MASS_G};
pub use temperature::Temperature;
