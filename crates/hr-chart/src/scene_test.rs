use approx::assert_relative_eq;
use stellar::{EvolutionTrack, StarObservation};

use crate::options::ChartOptions;
use crate::scene::Scene;

#[test]
fn sun_like_scene() {
    let scene = Scene::compute(1.0, 5800.0, &ChartOptions::default()).unwrap();

    assert_eq!(scene.mass.to_solar_masses(), 1.0);
    assert_eq!(scene.track, EvolutionTrack::LowMass);
    assert_eq!(scene.path.len(), 3);
    assert_eq!(scene.mass_line(), "Estimated mass: 1.00 solar masses");
    assert!(scene.explanation().starts_with("### Explanation"));
    assert_eq!(scene.figure.frames.len(), 3);
}

#[test]
fn massive_scene() {
    let scene = Scene::compute(100_000.0, 20000.0, &ChartOptions::default()).unwrap();
    assert_eq!(scene.track, EvolutionTrack::HighMass);
    assert_relative_eq!(scene.mass.to_solar_masses(), 26.827, max_relative = 1e-4);
    assert_eq!(scene.mass_line(), "Estimated mass: 26.83 solar masses");
}

#[test]
fn out_of_range_input_is_clamped() {
    let scene = Scene::compute(0.0, 99_999.0, &ChartOptions::default()).unwrap();
    assert_eq!(scene.observation, StarObservation::clamped(0.0001, 50000.0));
    assert_eq!(scene.figure.data[3].x[0], 50000.0);
    assert_eq!(scene.figure.data[3].y[0], 0.0001);
}

#[test]
fn recomputation_is_repeatable() {
    let options = ChartOptions::default();
    let first = Scene::compute(42.0, 9000.0, &options).unwrap();
    let second = Scene::compute(42.0, 9000.0, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn serialized_scene_uses_camel_case() {
    let scene = Scene::compute(1.0, 5800.0, &ChartOptions::default()).unwrap();
    let value = serde_json::to_value(&scene).unwrap();
    assert_eq!(value["massLine"], "Estimated mass: 1.00 solar masses");
    assert_eq!(value["track"], "LowMass");
    assert_eq!(value["locale"], "english");
    assert!(value["figure"]["frames"].is_array());
}
