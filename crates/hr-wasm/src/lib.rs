//! WASM bindings for the H-R diagram explorer.
//!
//! A browser page calls [`hr_scene`] on every input change and hands the
//! returned `figure` to plotly.js. Nothing is retained between calls.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const scene = hr_scene(1.0, 5800.0);
//! massLabel.textContent = scene.massLine;
//! Plotly.newPlot("chart", scene.figure.data, scene.figure.layout)
//!   .then(() => Plotly.addFrames("chart", scene.figure.frames));
//! ```

use wasm_bindgen::prelude::*;

mod diagram;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

pub use crate::diagram::{
    estimate_mass, evolution_path, hr_background, hr_scene, hr_scene_localized,
};
