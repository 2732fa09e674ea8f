//! Render and interactive loops.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use hr_chart::{render_scene_html, ChartOptions, Scene};
use tracing::{debug, info, warn};

use crate::cli::{ChartArgs, Cli, Command, InteractiveArgs, OutputFormat, RenderArgs};

/// Serialize a scene in the requested format
fn chart_contents(scene: &Scene, format: OutputFormat, options: &ChartOptions) -> Result<String> {
    let contents = match format {
        OutputFormat::Html => render_scene_html(scene, options)?,
        OutputFormat::Json => scene.figure.to_json_pretty()?,
        OutputFormat::Scene => serde_json::to_string_pretty(scene)?,
    };
    Ok(contents)
}

/// Write a scene's chart to `path`.
pub fn write_chart(
    path: &Path,
    scene: &Scene,
    format: OutputFormat,
    options: &ChartOptions,
) -> Result<()> {
    let contents = chart_contents(scene, format, options)?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), ?format, "wrote chart");
    Ok(())
}

/// Emit the chart either to its file or, for `-o -`, onto `out`.
fn emit_chart<W: Write>(scene: &Scene, chart: &ChartArgs, out: &mut W) -> Result<()> {
    let options = chart.options();
    if chart.writes_to_stdout() {
        let contents = chart_contents(scene, chart.format, &options)?;
        writeln!(out, "{}", contents)?;
        Ok(())
    } else {
        write_chart(&chart.output_path(), scene, chart.format, &options)
    }
}

/// Parse one line of interactive input: two numbers separated by
/// whitespace or a comma.
pub fn parse_input(line: &str) -> Result<(f64, f64)> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();

    if fields.len() != 2 {
        bail!(
            "expected \"<luminosity> <temperature>\", got {} value(s)",
            fields.len()
        );
    }

    let luminosity: f64 = fields[0]
        .parse()
        .with_context(|| format!("invalid luminosity: {}", fields[0]))?;
    let temperature: f64 = fields[1]
        .parse()
        .with_context(|| format!("invalid temperature: {}", fields[1]))?;
    Ok((luminosity, temperature))
}

/// One-shot: compute a scene, print the report, write the chart.
///
/// With the chart on stdout the text report goes to `report` instead, so the
/// two never interleave.
pub fn render<W: Write, E: Write>(args: &RenderArgs, out: &mut W, report: &mut E) -> Result<()> {
    let options = args.chart.options();
    let scene = Scene::compute(args.luminosity, args.temperature, &options)?;
    debug!(
        luminosity = args.luminosity,
        temperature = args.temperature,
        "rendering scene"
    );

    if args.chart.writes_to_stdout() {
        writeln!(report, "{}", scene.mass_line())?;
        write!(report, "{}", scene.explanation())?;
    } else {
        writeln!(out, "{}", scene.mass_line())?;
        write!(out, "{}", scene.explanation())?;
    }
    emit_chart(&scene, &args.chart, out)
}

/// Line-driven session. Every accepted line is a fresh interaction.
///
/// Malformed lines are reported and skipped; `quit`, `exit` or end of input
/// ends the session. Returns the number of scenes rendered.
pub fn interactive<R: BufRead, W: Write>(
    args: &InteractiveArgs,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let labels = args.chart.locale.labels();
    writeln!(out, "{}", labels.app_title)?;
    write!(out, "{}", labels.explanation_text())?;
    writeln!(out, "{}", labels.input_prompt)?;
    writeln!(
        out,
        "  <{}> <{}>",
        labels.luminosity_input, labels.temperature_input
    )?;

    let options = args.chart.options();
    let mut rendered = 0;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let (luminosity, temperature) = match parse_input(line) {
            Ok(values) => values,
            Err(err) => {
                warn!(input = line, "skipping malformed input");
                writeln!(out, "skipped: {:#}", err)?;
                continue;
            }
        };

        let scene = Scene::compute(luminosity, temperature, &options)?;
        let observation = &scene.observation;
        writeln!(
            out,
            "L = {}, T = {} -> {}",
            observation.luminosity,
            observation.temperature,
            scene.mass_line()
        )?;
        emit_chart(&scene, &args.chart, out)?;
        rendered += 1;
    }

    info!(rendered, "interactive session ended");
    Ok(rendered)
}

/// Dispatch a parsed command line against the process streams.
pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Render(args) => {
            let stderr = std::io::stderr();
            let mut report = stderr.lock();
            render(&args, &mut out, &mut report)
        }
        Command::Interactive(args) => {
            let stdin = std::io::stdin();
            interactive(&args, stdin.lock(), &mut out).map(|_| ())
        }
    }
}
