//! H-R diagram chart composition.
//!
//! Turns the stellar background loci and an evolution path into a figure
//! description in the plotly.js schema. Rendering, frame playback and
//! interactivity stay with plotly.js; this crate only shapes data.

pub mod compose;
pub mod error;
pub mod figure;
pub mod html;
pub mod locale;
pub mod options;
pub mod scene;

#[cfg(test)]
mod locale_test;
#[cfg(test)]
mod scene_test;

pub use compose::{compose_figure, HIGHLIGHT_TRACE};
pub use error::ChartError;
pub use figure::{
    AnimationOptions, Autorange, Axis, AxisType, Button, ButtonMethod, Color, Figure, Frame,
    FrameTiming, Layout, Line, Marker, MenuType, Title, Trace, TraceKind, TraceMode, UpdateMenu,
};
pub use html::{render_html, render_scene_html};
pub use locale::{Labels, Locale};
pub use options::{ChartOptions, MarkerSizes};
pub use scene::Scene;
