use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use hr_chart::{options::DEFAULT_PLOTLY_SRC, ChartOptions, Locale};

#[derive(Parser, Debug)]
#[command(name = "hr-diagram")]
#[command(about = "Plot a star on the H-R diagram and animate its schematic evolution")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute one scene and write the chart
    Render(RenderArgs),
    /// Read "luminosity temperature" lines from stdin, re-rendering on each
    Interactive(InteractiveArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Standalone page that loads plotly.js
    Html,
    /// plotly figure JSON (data, layout, frames)
    Json,
    /// Full scene JSON: observation, mass, path, figure
    Scene,
}

impl OutputFormat {
    pub fn default_path(&self) -> &'static Path {
        match self {
            OutputFormat::Html => Path::new("hr-diagram.html"),
            OutputFormat::Json => Path::new("hr-diagram.json"),
            OutputFormat::Scene => Path::new("hr-scene.json"),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Label language (en, ko)
    #[arg(long, default_value = "en")]
    pub locale: Locale,

    /// Milliseconds each animation frame is held
    #[arg(long, default_value_t = 1000)]
    pub frame_duration_ms: u64,

    /// plotly.js script URL embedded in HTML output
    #[arg(long, default_value = DEFAULT_PLOTLY_SRC)]
    pub plotly_src: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Output file; "-" writes the chart to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ChartArgs {
    pub fn options(&self) -> ChartOptions {
        ChartOptions {
            locale: self.locale,
            frame_duration_ms: self.frame_duration_ms,
            plotly_src: self.plotly_src.clone(),
            ..ChartOptions::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.format.default_path().to_path_buf())
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_deref() == Some(Path::new("-"))
    }
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Luminosity in solar units, clamped to [0.0001, 1000000]
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub luminosity: f64,

    /// Surface temperature in Kelvin, clamped to [1000, 50000]
    #[arg(short, long, default_value_t = 5800.0, allow_negative_numbers = true)]
    pub temperature: f64,

    #[command(flatten)]
    pub chart: ChartArgs,
}

#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub chart: ChartArgs,
}
