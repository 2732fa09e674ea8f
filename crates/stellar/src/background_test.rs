use approx::assert_relative_eq;

use crate::background::{hr_background, linspace, LocusKind};

#[test]
fn linspace_matches_endpoints_and_spacing() {
    let values = linspace(-4.0, 6.0, 100);
    assert_eq!(values.len(), 100);
    assert_eq!(values[0], -4.0);
    assert_eq!(values[99], 6.0);

    let step = 10.0 / 99.0;
    for pair in values.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], step, epsilon = 1e-12);
    }
}

#[test]
fn linspace_degenerate_counts() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.5, 3.7, 1), vec![3.5]);
    assert_eq!(linspace(1.0, 4.0, 2), vec![1.0, 4.0]);
}

#[test]
fn locus_point_counts() {
    let bg = hr_background();
    assert_eq!(bg.main_sequence.len(), 100);
    assert_eq!(bg.giants.len(), 50);
    assert_eq!(bg.white_dwarfs.len(), 50);

    assert_eq!(bg.main_sequence.kind, LocusKind::MainSequence);
    assert_eq!(bg.giants.kind, LocusKind::Giants);
    assert_eq!(bg.white_dwarfs.kind, LocusKind::WhiteDwarfs);
}

#[test]
fn background_is_deterministic() {
    let first = hr_background();
    let second = hr_background();
    assert_eq!(first, second);

    // Bit-exact, not just approximately equal
    for (a, b) in first.loci().iter().zip(second.loci().iter()) {
        for (p, q) in a.points.iter().zip(b.points.iter()) {
            assert_eq!(p.temperature.to_kelvin().to_bits(), q.temperature.to_kelvin().to_bits());
            assert_eq!(
                p.luminosity.to_solar_luminosities().to_bits(),
                q.luminosity.to_solar_luminosities().to_bits()
            );
        }
    }
}

#[test]
fn luminosity_sweeps_are_monotonic() {
    let bg = hr_background();
    for locus in bg.loci() {
        let logs: Vec<f64> = locus.points.iter().map(|p| p.luminosity.log10()).collect();
        assert!(
            logs.windows(2).all(|w| w[1] > w[0]),
            "{:?} luminosity should increase along the locus",
            locus.kind
        );
    }
}

#[test]
fn main_sequence_follows_linear_log_relation() {
    let bg = hr_background();
    for point in &bg.main_sequence.points {
        let log_l = point.luminosity.log10();
        assert_relative_eq!(point.temperature.log10(), 3.76 - 0.1 * log_l, epsilon = 1e-9);
    }
}

#[test]
fn locus_ranges() {
    let bg = hr_background();

    let ms = &bg.main_sequence.points;
    assert_relative_eq!(ms[0].luminosity.log10(), -4.0, epsilon = 1e-12);
    assert_relative_eq!(ms[99].luminosity.log10(), 6.0, epsilon = 1e-12);

    let giants = &bg.giants.points;
    assert_relative_eq!(giants[0].luminosity.log10(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(giants[49].luminosity.log10(), 4.0, epsilon = 1e-12);
    assert_relative_eq!(giants[0].temperature.log10(), 3.5, epsilon = 1e-12);
    assert_relative_eq!(giants[49].temperature.log10(), 3.7, epsilon = 1e-12);

    let wds = &bg.white_dwarfs.points;
    assert_relative_eq!(wds[0].luminosity.log10(), -4.0, epsilon = 1e-12);
    assert_relative_eq!(wds[49].luminosity.log10(), -1.0, epsilon = 1e-12);
    assert_relative_eq!(wds[0].temperature.to_kelvin(), 10_000.0, max_relative = 1e-12);
    assert_relative_eq!(wds[49].temperature.log10(), 4.5, epsilon = 1e-12);
}

#[test]
fn column_accessors_align_with_points() {
    let bg = hr_background();
    let xs = bg.giants.temperatures();
    let ys = bg.giants.luminosities();
    assert_eq!(xs.len(), ys.len());
    assert_eq!(xs[10], bg.giants.points[10].temperature.to_kelvin());
    assert_eq!(ys[10], bg.giants.points[10].luminosity.to_solar_luminosities());
}
