//! Terminal front end for the H-R diagram explorer.
//!
//! Each luminosity/temperature pair the user supplies is one interaction.
//! It is recomputed from scratch into a [`hr_chart::Scene`], reported as
//! text, and written out as a chart file.

pub mod cli;
pub mod shell;


pub use cli::{ChartArgs, Cli, Command, InteractiveArgs, OutputFormat, RenderArgs};
pub use shell::{interactive, parse_input, render, run, write_chart};
