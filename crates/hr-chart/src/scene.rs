//! One full recomputation for a single user interaction.

use serde::Serialize;
use stellar::{hr_background, EvolutionPath, EvolutionTrack, StarObservation, StellarError};
use units::Mass;

use crate::compose::compose_figure;
use crate::figure::Figure;
use crate::locale::Locale;
use crate::options::ChartOptions;

/// Everything displayed after the user enters a luminosity and temperature.
///
/// Nothing is cached between scenes; each one regenerates the background,
/// the mass estimate, the path and the figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub observation: StarObservation,
    pub mass: Mass,
    pub track: EvolutionTrack,
    pub path: EvolutionPath,
    pub mass_line: String,
    pub explanation: String,
    pub locale: Locale,
    pub figure: Figure,
}

impl Scene {
    /// Build a scene from raw input, clamping it into the accepted bounds.
    pub fn compute(
        luminosity: f64,
        temperature: f64,
        options: &ChartOptions,
    ) -> Result<Self, StellarError> {
        Self::from_observation(StarObservation::clamped(luminosity, temperature), options)
    }

    pub fn from_observation(
        observation: StarObservation,
        options: &ChartOptions,
    ) -> Result<Self, StellarError> {
        let (mass, path) = EvolutionPath::for_observation(&observation)?;
        let background = hr_background();
        let figure = compose_figure(&background, &path, options);
        let labels = options.locale.labels();

        Ok(Self {
            observation,
            mass,
            track: path.track(),
            mass_line: labels.mass_line(mass.to_solar_masses()),
            explanation: labels.explanation_text(),
            locale: options.locale,
            path,
            figure,
        })
    }

    pub fn mass_line(&self) -> &str {
        &self.mass_line
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}
