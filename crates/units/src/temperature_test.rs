use approx::assert_relative_eq;

use crate::temperature::Temperature;

#[test]
fn log10_round_trip() {
    let temp = Temperature::from_log10(3.76);
    assert_relative_eq!(temp.log10(), 3.76, epsilon = 1e-12);

    let sun = Temperature::from_kelvin(5800.0);
    assert_relative_eq!(Temperature::from_log10(sun.log10()).to_kelvin(), 5800.0, max_relative = 1e-12);
}

#[test]
fn scaling() {
    let sun = Temperature::from_kelvin(5800.0);
    assert_relative_eq!((sun * 0.7).to_kelvin(), 4060.0, max_relative = 1e-12);
    assert_relative_eq!((sun * 1.5).to_kelvin(), 8700.0, max_relative = 1e-12);
}

#[test]
fn physical_check() {
    assert!(Temperature::from_kelvin(1000.0).is_physical());
    assert!(!Temperature::from_kelvin(0.0).is_physical());
    assert!(!Temperature::from_kelvin(-10.0).is_physical());
    assert!(!Temperature::from_kelvin(f64::NAN).is_physical());
    assert!(!Temperature::from_kelvin(f64::INFINITY).is_physical());
}

#[test]
fn clamp_to_bounds() {
    let min = Temperature::from_kelvin(1000.0);
    let max = Temperature::from_kelvin(50000.0);
    assert_eq!(Temperature::from_kelvin(10.0).clamp(min, max), min);
    assert_eq!(Temperature::from_kelvin(90000.0).clamp(min, max), max);
    assert_eq!(
        Temperature::from_kelvin(5800.0).clamp(min, max),
        Temperature::from_kelvin(5800.0)
    );
}

#[test]
fn clamp_with_inverted_or_nan_bounds_does_not_panic() {
    let hot = Temperature::from_kelvin(50000.0);
    let cool = Temperature::from_kelvin(1000.0);
    assert_eq!(Temperature::from_kelvin(5800.0).clamp(hot, cool), cool);

    let nan = Temperature::from_kelvin(f64::NAN);
    assert_eq!(Temperature::from_kelvin(5800.0).clamp(nan, hot).to_kelvin(), 5800.0);
}

#[test]
fn display_rounds_to_whole_kelvin() {
    assert_eq!(Temperature::from_kelvin(5800.4).to_string(), "5800 K");
}
