//! WASM bindings for scene, mass and path computation.

use hr_chart::{ChartOptions, Locale, Scene};
use stellar::{EvolutionPath, StarObservation};
use wasm_bindgen::prelude::*;

use crate::to_js;

/// Compute a full scene with English labels.
///
/// Inputs are clamped to luminosity [0.0001, 1e6] L☉ and temperature
/// [1000, 50000] K.
///
/// # Returns
/// Object with observation, mass, track, path, massLine, explanation, figure
#[wasm_bindgen]
pub fn hr_scene(luminosity: f64, temperature: f64) -> Result<JsValue, JsError> {
    scene(luminosity, temperature, Locale::English)
}

/// Compute a full scene with labels in `locale` ("en" or "ko").
#[wasm_bindgen]
pub fn hr_scene_localized(
    luminosity: f64,
    temperature: f64,
    locale: &str,
) -> Result<JsValue, JsError> {
    let locale: Locale = locale.parse().map_err(|e: String| JsError::new(&e))?;
    scene(luminosity, temperature, locale)
}

fn scene(luminosity: f64, temperature: f64, locale: Locale) -> Result<JsValue, JsError> {
    let options = ChartOptions::default().with_locale(locale);
    let scene = Scene::compute(luminosity, temperature, &options)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&scene)
}

/// Estimated mass in solar masses for a luminosity in L☉.
///
/// Unlike the scene and path exports this does not clamp: the estimator is
/// defined for any positive luminosity, so only non-positive or non-finite
/// values raise an error.
#[wasm_bindgen]
pub fn estimate_mass(luminosity: f64) -> Result<f64, JsError> {
    stellar::estimate_mass(units::Luminosity::from_solar_luminosities(luminosity))
        .map(|mass| mass.to_solar_masses())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// The three-stage path for an observation.
///
/// Inputs are clamped to the same bounds as [`hr_scene`], so the path always
/// matches the one drawn in the scene's figure.
#[wasm_bindgen]
pub fn evolution_path(luminosity: f64, temperature: f64) -> Result<JsValue, JsError> {
    let observation = StarObservation::clamped(luminosity, temperature);
    let (_, path) = EvolutionPath::for_observation(&observation)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&path)
}

/// The fixed main-sequence, giant and white-dwarf loci.
#[wasm_bindgen]
pub fn hr_background() -> Result<JsValue, JsError> {
    to_js(&stellar::hr_background())
}
