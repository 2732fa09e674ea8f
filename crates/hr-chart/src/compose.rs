//! Assembles background loci and an evolution path into a [`Figure`].

use stellar::{
    BackgroundLocus, EvolutionPath, EvolutionStage, HrBackground, LocusKind, SpectralType,
};
use tracing::debug;

use crate::figure::{
    AnimationOptions, Autorange, Axis, AxisType, Button, ButtonMethod, Color, Figure, Frame,
    FrameTiming, Layout, Line, Marker, MenuType, Title, Trace, TraceMode, UpdateMenu,
};
use crate::locale::Labels;
use crate::options::ChartOptions;

/// Index of the trace the animation frames replace
///
/// Traces are laid out as main sequence, giants, white dwarfs, evolution
/// path, then the highlighted stage.
pub const HIGHLIGHT_TRACE: usize = 4;

fn locus_trace(locus: &BackgroundLocus, labels: &Labels, options: &ChartOptions) -> Trace {
    let (name, color) = match locus.kind {
        LocusKind::MainSequence => (labels.main_sequence, Color::Blue),
        LocusKind::Giants => (labels.giants, Color::Red),
        LocusKind::WhiteDwarfs => (labels.white_dwarfs, Color::Green),
    };

    Trace::scatter(
        locus.temperatures(),
        locus.luminosities(),
        TraceMode::Markers,
        Marker {
            color: Some(color),
            size: options.marker_sizes.background,
        },
    )
    .named(name)
}

fn stage_label(stage: &EvolutionStage, labels: &Labels) -> String {
    let kelvin = stage.temperature.to_kelvin();
    format!(
        "{} ({}-type, {:.0} K, {:.3e} L_sun)",
        labels.phase(stage.phase),
        SpectralType::from_temperature(kelvin),
        kelvin,
        stage.luminosity.to_solar_luminosities()
    )
}

fn path_trace(path: &EvolutionPath, labels: &Labels, options: &ChartOptions) -> Trace {
    Trace::scatter(
        path.temperatures(),
        path.luminosities(),
        TraceMode::LinesMarkers,
        Marker {
            color: None,
            size: options.marker_sizes.path,
        },
    )
    .named(labels.evolution_path)
    .with_line(Line {
        color: Color::Black,
    })
    .with_text(path.iter().map(|s| stage_label(s, labels)).collect())
}

fn highlight_trace(stage: &EvolutionStage, labels: &Labels, options: &ChartOptions) -> Trace {
    Trace::scatter(
        vec![stage.temperature.to_kelvin()],
        vec![stage.luminosity.to_solar_luminosities()],
        TraceMode::Markers,
        Marker {
            color: Some(Color::Yellow),
            size: options.marker_sizes.highlight,
        },
    )
    .with_text(vec![stage_label(stage, labels)])
    .with_legend(false)
}

fn frames(path: &EvolutionPath, labels: &Labels, options: &ChartOptions) -> Vec<Frame> {
    path.iter()
        .enumerate()
        .map(|(index, stage)| Frame {
            name: format!("{}: {}", index, labels.phase(stage.phase)),
            data: vec![highlight_trace(stage, labels, options)],
            traces: vec![HIGHLIGHT_TRACE],
        })
        .collect()
}

fn layout(labels: &Labels, options: &ChartOptions) -> Layout {
    let play = Button {
        label: labels.play.to_string(),
        method: ButtonMethod::Animate,
        args: (
            None,
            AnimationOptions {
                frame: FrameTiming {
                    duration: options.frame_duration_ms,
                    redraw: true,
                },
                fromcurrent: true,
            },
        ),
    };

    Layout {
        title: Title::new(labels.chart_title),
        // Hot stars on the left
        xaxis: Axis {
            title: Title::new(labels.temperature_axis),
            scale: AxisType::Log,
            autorange: Some(Autorange::Reversed),
        },
        yaxis: Axis {
            title: Title::new(labels.luminosity_axis),
            scale: AxisType::Log,
            autorange: None,
        },
        updatemenus: vec![UpdateMenu {
            kind: MenuType::Buttons,
            buttons: vec![play],
        }],
    }
}

/// Compose the full animated H-R figure.
///
/// The figure carries the three background loci, the evolution path as a
/// line, and a highlighted marker on the first stage. There is one frame per
/// stage, each moving the highlight to that stage.
pub fn compose_figure(
    background: &HrBackground,
    path: &EvolutionPath,
    options: &ChartOptions,
) -> Figure {
    let labels = options.locale.labels();

    let mut data: Vec<Trace> = background
        .loci()
        .iter()
        .map(|locus| locus_trace(locus, labels, options))
        .collect();
    data.push(path_trace(path, labels, options));
    data.push(highlight_trace(&path.stages()[0], labels, options));

    let frames = frames(path, labels, options);

    debug!(
        traces = data.len(),
        frames = frames.len(),
        track = ?path.track(),
        locale = %options.locale,
        "composed H-R figure"
    );

    Figure {
        data,
        layout: layout(labels, options),
        frames,
    }
}
