//! Synthetic background loci for the H-R diagram.
//!
//! The three loci are illustrative, not catalogue data. Each one is a
//! straight line in log-log space, sampled evenly in log₁₀(L).

use serde::{Deserialize, Serialize};
use tracing::trace;
use units::{Luminosity, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Main sequence: log₁₀(T) = 3.76 − 0.1·log₁₀(L)
const MAIN_SEQUENCE_LOG_T_INTERCEPT: f64 = 3.76;
const MAIN_SEQUENCE_LOG_T_SLOPE: f64 = -0.1;
const MAIN_SEQUENCE_LOG_L: (f64, f64) = (-4.0, 6.0);
const MAIN_SEQUENCE_POINTS: usize = 100;

const GIANT_LOG_L: (f64, f64) = (1.0, 4.0);
const GIANT_LOG_T: (f64, f64) = (3.5, 3.7);
const GIANT_POINTS: usize = 50;

const WHITE_DWARF_LOG_L: (f64, f64) = (-4.0, -1.0);
const WHITE_DWARF_LOG_T: (f64, f64) = (4.0, 4.5);
const WHITE_DWARF_POINTS: usize = 50;

/// Which region of the diagram a locus represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum LocusKind {
    MainSequence,
    Giants,
    WhiteDwarfs,
}

/// A single (temperature, luminosity) sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HrPoint {
    pub temperature: Temperature,
    pub luminosity: Luminosity,
}

impl HrPoint {
    fn from_logs(log_temperature: f64, log_luminosity: f64) -> Self {
        Self {
            temperature: Temperature::from_log10(log_temperature),
            luminosity: Luminosity::from_log10(log_luminosity),
        }
    }
}

/// An ordered run of points, in increasing luminosity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundLocus {
    pub kind: LocusKind,
    pub points: Vec<HrPoint>,
}

impl BackgroundLocus {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Temperatures in Kelvin, the x column of a chart trace
    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.temperature.to_kelvin()).collect()
    }

    /// Luminosities in L☉, the y column of a chart trace
    pub fn luminosities(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.luminosity.to_solar_luminosities())
            .collect()
    }
}

/// The three background loci drawn behind every evolution path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrBackground {
    pub main_sequence: BackgroundLocus,
    pub giants: BackgroundLocus,
    pub white_dwarfs: BackgroundLocus,
}

impl HrBackground {
    /// Loci in drawing order
    pub fn loci(&self) -> [&BackgroundLocus; 3] {
        [&self.main_sequence, &self.giants, &self.white_dwarfs]
    }
}

/// Evenly spaced samples over `[start, stop]`, endpoints included.
///
/// Sample `i` is `start + i * step`. The final sample is pinned to `stop` so
/// the sweep ends exactly on the interval boundary.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

fn main_sequence() -> BackgroundLocus {
    let points = linspace(MAIN_SEQUENCE_LOG_L.0, MAIN_SEQUENCE_LOG_L.1, MAIN_SEQUENCE_POINTS)
        .into_iter()
        .map(|log_l| {
            let log_t = MAIN_SEQUENCE_LOG_T_INTERCEPT + MAIN_SEQUENCE_LOG_T_SLOPE * log_l;
            HrPoint::from_logs(log_t, log_l)
        })
        .collect();

    BackgroundLocus {
        kind: LocusKind::MainSequence,
        points,
    }
}

/// Luminosity and temperature swept independently, paired by index
fn independent_sweep(
    kind: LocusKind,
    log_l: (f64, f64),
    log_t: (f64, f64),
    n: usize,
) -> BackgroundLocus {
    let points = linspace(log_l.0, log_l.1, n)
        .into_iter()
        .zip(linspace(log_t.0, log_t.1, n))
        .map(|(log_l, log_t)| HrPoint::from_logs(log_t, log_l))
        .collect();

    BackgroundLocus { kind, points }
}

/// Generate the fixed H-R background.
///
/// Main sequence has 100 points, giants and white dwarfs 50 each. The result
/// is identical on every call.
pub fn hr_background() -> HrBackground {
    let background = HrBackground {
        main_sequence: main_sequence(),
        giants: independent_sweep(LocusKind::Giants, GIANT_LOG_L, GIANT_LOG_T, GIANT_POINTS),
        white_dwarfs: independent_sweep(
            LocusKind::WhiteDwarfs,
            WHITE_DWARF_LOG_L,
            WHITE_DWARF_LOG_T,
            WHITE_DWARF_POINTS,
        ),
    };

    trace!(
        main_sequence = background.main_sequence.len(),
        giants = background.giants.len(),
        white_dwarfs = background.white_dwarfs.len(),
        "generated H-R background"
    );

    background
}
