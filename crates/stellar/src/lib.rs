//! Stellar models behind the H-R diagram explorer.
//!
//! Everything here is a pure function of its inputs: the background loci
//! are fixed, the mass comes from a single power law, and the evolution path
//! is one of two schematic templates.

pub mod background;
pub mod error;
pub mod evolution;
pub mod mass;
pub mod observation;
pub mod spectral;

#[cfg(test)]
mod background_test;
#[cfg(test)]
mod spectral_test;

// Re-export types
pub use background::{BackgroundLocus, HrBackground, HrPoint, LocusKind};
pub use error::StellarError;
pub use evolution::{EvolutionPath, EvolutionPhase, EvolutionStage, EvolutionTrack};
pub use observation::{ObservationBounds, StarObservation};
pub use spectral::SpectralType;

// Re-export functions
pub use background::{hr_background, linspace};
pub use evolution::{plan_evolution, HIGH_MASS_THRESHOLD};
pub use mass::{estimate_mass, MASS_LUMINOSITY_EXPONENT};
