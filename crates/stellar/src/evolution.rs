//! Schematic evolution paths across the H-R diagram.
//!
//! A path is not a stellar-evolution model. It is a fixed three-stage
//! template scaled from the star's current position, chosen by mass.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Luminosity, Mass, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::StellarError;
use crate::mass::estimate_mass;
use crate::observation::StarObservation;

/// Stars at or above this mass (M☉) follow the high-mass track
pub const HIGH_MASS_THRESHOLD: f64 = 8.0;

// Low-mass track: main sequence -> red giant -> white dwarf
const RED_GIANT_LUMINOSITY_FACTOR: f64 = 100.0;
const RED_GIANT_TEMPERATURE_FACTOR: f64 = 0.7;
const WHITE_DWARF_LUMINOSITY_DIVISOR: f64 = 100.0;
const WHITE_DWARF_TEMPERATURE_FACTOR: f64 = 1.5;

// High-mass track: main sequence -> supergiant -> supernova
const SUPERGIANT_LUMINOSITY_FACTOR: f64 = 1000.0;
const SUPERGIANT_TEMPERATURE_FACTOR: f64 = 0.6;

/// Which template produced a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum EvolutionTrack {
    /// M < 8 M☉: ends as a white dwarf
    LowMass,
    /// M ≥ 8 M☉: ends in a supernova
    HighMass,
}

impl EvolutionTrack {
    pub fn for_mass(mass: Mass) -> Self {
        if mass.to_solar_masses() < HIGH_MASS_THRESHOLD {
            EvolutionTrack::LowMass
        } else {
            EvolutionTrack::HighMass
        }
    }
}

/// Named stage of a schematic path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum EvolutionPhase {
    MainSequence,
    RedGiant,
    WhiteDwarf,
    Supergiant,
    /// Drawn at the supergiant's position
    Supernova,
}

impl fmt::Display for EvolutionPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            EvolutionPhase::MainSequence => "main sequence",
            EvolutionPhase::RedGiant => "red giant",
            EvolutionPhase::WhiteDwarf => "white dwarf",
            EvolutionPhase::Supergiant => "supergiant",
            EvolutionPhase::Supernova => "supernova",
        };
        write!(f, "{}", str)
    }
}

/// One point on a path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvolutionStage {
    pub phase: EvolutionPhase,
    pub luminosity: Luminosity,
    pub temperature: Temperature,
}

impl EvolutionStage {
    fn new(phase: EvolutionPhase, luminosity: Luminosity, temperature: Temperature) -> Self {
        Self {
            phase,
            luminosity,
            temperature,
        }
    }
}

/// Exactly three stages, ordered in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionPath {
    track: EvolutionTrack,
    stages: [EvolutionStage; 3],
}

impl EvolutionPath {
    /// Estimate mass from the observation and plan its path.
    pub fn for_observation(
        observation: &StarObservation,
    ) -> Result<(Mass, EvolutionPath), StellarError> {
        let mass = estimate_mass(observation.luminosity)?;
        let path = plan_evolution(observation.luminosity, observation.temperature, mass)?;
        Ok((mass, path))
    }

    pub fn track(&self) -> EvolutionTrack {
        self.track
    }

    pub fn stages(&self) -> &[EvolutionStage] {
        &self.stages
    }

    /// Always 3
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvolutionStage> {
        self.stages.iter()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.stages.iter().map(|s| s.temperature.to_kelvin()).collect()
    }

    pub fn luminosities(&self) -> Vec<f64> {
        self.stages
            .iter()
            .map(|s| s.luminosity.to_solar_luminosities())
            .collect()
    }
}

/// Choose and scale the schematic path for a star.
///
/// # Tracks
/// * M < 8 M☉: (L, T) → (100·L, 0.7·T) red giant → (L/100, 1.5·T) white dwarf
/// * M ≥ 8 M☉: (L, T) → (1000·L, 0.6·T) supergiant → supernova at the same point
///
/// # Errors
/// Any input that is not positive and finite is rejected.
///
/// # Example
/// ```
/// use stellar::{plan_evolution, EvolutionTrack};
/// use units::{Luminosity, Mass, Temperature};
///
/// let path = plan_evolution(
///     Luminosity::solar(),
///     Temperature::from_kelvin(5800.0),
///     Mass::from_solar_masses(1.0),
/// )
/// .unwrap();
/// assert_eq!(path.track(), EvolutionTrack::LowMass);
/// assert_eq!(path.len(), 3);
/// ```
pub fn plan_evolution(
    luminosity: Luminosity,
    temperature: Temperature,
    mass: Mass,
) -> Result<EvolutionPath, StellarError> {
    if !luminosity.is_physical() {
        return Err(StellarError::InvalidLuminosity(
            luminosity.to_solar_luminosities(),
        ));
    }
    if !temperature.is_physical() {
        return Err(StellarError::InvalidTemperature(temperature.to_kelvin()));
    }
    if !mass.is_physical() {
        return Err(StellarError::InvalidMass(mass.to_solar_masses()));
    }

    let track = EvolutionTrack::for_mass(mass);
    let start = EvolutionStage::new(EvolutionPhase::MainSequence, luminosity, temperature);

    let stages = match track {
        EvolutionTrack::LowMass => [
            start,
            EvolutionStage::new(
                EvolutionPhase::RedGiant,
                luminosity * RED_GIANT_LUMINOSITY_FACTOR,
                temperature * RED_GIANT_TEMPERATURE_FACTOR,
            ),
            EvolutionStage::new(
                EvolutionPhase::WhiteDwarf,
                luminosity / WHITE_DWARF_LUMINOSITY_DIVISOR,
                temperature * WHITE_DWARF_TEMPERATURE_FACTOR,
            ),
        ],
        EvolutionTrack::HighMass => {
            let supergiant_l = luminosity * SUPERGIANT_LUMINOSITY_FACTOR;
            let supergiant_t = temperature * SUPERGIANT_TEMPERATURE_FACTOR;
            [
                start,
                EvolutionStage::new(EvolutionPhase::Supergiant, supergiant_l, supergiant_t),
                EvolutionStage::new(EvolutionPhase::Supernova, supergiant_l, supergiant_t),
            ]
        }
    };

    debug!(
        mass = mass.to_solar_masses(),
        ?track,
        "planned evolution path"
    );

    Ok(EvolutionPath { track, stages })
}
