use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// plotly.js build loaded by standalone HTML pages
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Marker diameters in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSizes {
    pub background: f64,
    pub path: f64,
    pub highlight: f64,
}

impl Default for MarkerSizes {
    fn default() -> Self {
        Self {
            background: 5.0,
            path: 10.0,
            highlight: 15.0,
        }
    }
}

/// Presentation settings for a composed chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptions {
    pub locale: Locale,
    /// How long the play button holds each frame, in milliseconds
    pub frame_duration_ms: u64,
    pub marker_sizes: MarkerSizes,
    pub plotly_src: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            frame_duration_ms: 1000,
            marker_sizes: MarkerSizes::default(),
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
        }
    }
}

impl ChartOptions {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
