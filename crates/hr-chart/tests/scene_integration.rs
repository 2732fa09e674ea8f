//! End-to-end: raw input to a serialized, renderable figure.

use hr_chart::{render_scene_html, ChartOptions, Figure, Locale, Scene, HIGHLIGHT_TRACE};
use stellar::EvolutionTrack;

#[test]
fn figure_json_parses_back_into_the_same_shape() {
    let options = ChartOptions::default();
    let scene = Scene::compute(1.0, 5800.0, &options).unwrap();

    let json = scene.figure.to_json_pretty().unwrap();
    let parsed = Figure::from_json(&json).unwrap();
    assert_eq!(parsed.layout, scene.figure.layout);
    assert_eq!(parsed.data.len(), scene.figure.data.len());
    assert_eq!(parsed.frames.len(), 3);
    assert_eq!(parsed.frames[1].name, "1: Red giant");
}

#[test]
fn every_interaction_produces_three_frames() {
    let options = ChartOptions::default();
    let inputs = [
        (0.0001, 1000.0),
        (1.0, 5800.0),
        (1448.2, 15000.0),
        (1_000_000.0, 50000.0),
    ];

    for (l, t) in inputs {
        let scene = Scene::compute(l, t, &options).unwrap();
        assert_eq!(scene.figure.frames.len(), 3);
        assert!(scene
            .figure
            .frames
            .iter()
            .all(|frame| frame.traces == vec![HIGHLIGHT_TRACE]));
    }
}

#[test]
fn threshold_crossing_switches_track() {
    let options = ChartOptions::default();
    let below = Scene::compute(1400.0, 15000.0, &options).unwrap();
    let above = Scene::compute(1500.0, 15000.0, &options).unwrap();

    assert_eq!(below.track, EvolutionTrack::LowMass);
    assert_eq!(above.track, EvolutionTrack::HighMass);
    assert_eq!(below.mass_line(), "Estimated mass: 7.92 solar masses");
    assert_eq!(above.mass_line(), "Estimated mass: 8.08 solar masses");
}

#[test]
fn korean_page_renders() {
    let options = ChartOptions::default().with_locale(Locale::Korean);
    let scene = Scene::compute(100_000.0, 20000.0, &options).unwrap();
    let html = render_scene_html(&scene, &options).unwrap();

    assert!(html.contains("초거성"));
    assert!(html.contains("\"name\":\"2: 초신성\""));
}
