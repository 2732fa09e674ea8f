use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Lower temperature bound (K) of each Harvard class, hottest first
const TEMP_BOUNDS: [(SpectralType, f64); 10] = [
    (SpectralType::O, 30000.0),
    (SpectralType::B, 10000.0),
    (SpectralType::A, 7500.0),
    (SpectralType::F, 6000.0),
    (SpectralType::G, 5200.0),
    (SpectralType::K, 3700.0),
    (SpectralType::M, 2400.0),
    (SpectralType::L, 1300.0),
    (SpectralType::T, 550.0),
    (SpectralType::Y, 0.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    T,
    Y, // Brown dwarfs
}

impl SpectralType {
    /// Harvard class for an effective temperature in Kelvin.
    ///
    /// NaN and negative temperatures fall through to `Y`.
    pub fn from_temperature(kelvin: f64) -> Self {
        TEMP_BOUNDS
            .iter()
            .find(|(_, lower)| kelvin >= *lower)
            .map(|(class, _)| *class)
            .unwrap_or(SpectralType::Y)
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
            SpectralType::L => "L",
            SpectralType::T => "T",
            SpectralType::Y => "Y",
        };
        write!(f, "{}", str)
    }
}
