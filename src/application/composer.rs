// Dashboard composer - maps a snapshot onto a fixed set of parameterized panels
use crate::domain::error::ComposeError;
use crate::domain::layout::{Layout, LayoutVariant, PlacedPanel, Slot};
use crate::domain::measurement::{names, MatrixData, Measurement, ScalarData, TimeSeriesPoint};
use crate::domain::panel::{
    AxisTitles, ChartKind, GaugeRange, Panel, PanelBody, PanelStyle, ThresholdLine,
};
use crate::domain::snapshot::Snapshot;
use crate::domain::style::{self, PanelText};

pub const DEFAULT_TITLE: &str = "Steam & Heat Plant Operations";

#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    pub title: String,
    pub variant: LayoutVariant,
    /// Colour the mean efficiency KPI by the sign of (mean - target).
    pub recolor_mean_delta: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            variant: LayoutVariant::default(),
            recolor_mean_delta: false,
        }
    }
}

/// Maps snapshots onto the dashboard's fixed panel set.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: ComposeOptions,
}

impl Composer {
    pub fn new(options: ComposeOptions) -> Self {
        Self { options }
    }

    /// Same composer with another slot arrangement.
    pub fn with_variant(&self, variant: LayoutVariant) -> Self {
        Self::new(ComposeOptions {
            variant,
            ..self.options.clone()
        })
    }

    /// Build the full layout or fail as a whole; never returns a subset of panels.
    pub fn compose(&self, snapshot: &Snapshot) -> Result<Layout, ComposeError> {
        compose_layout(snapshot, &self.options)
    }
}

fn compose_layout(snapshot: &Snapshot, options: &ComposeOptions) -> Result<Layout, ComposeError> {
    // Absent names are reported before any shape problem.
    for name in names::REQUIRED {
        require(snapshot, name)?;
    }

    let leak_severity = require_matrix(snapshot, names::LEAK_SEVERITY)?;
    let efficiency = require_series(snapshot, names::BOILER_EFFICIENCY)?;
    let steam_flow = require_series(snapshot, names::STEAM_FLOW)?;
    let fuel = require_series(snapshot, names::FUEL_CONSUMPTION)?;
    let recovery = require_scalar(snapshot, names::CONDENSATE_RECOVERY)?;
    let steam_per_kg = require_scalar(snapshot, names::STEAM_PER_KG)?;
    let leak_loss = require_scalar(snapshot, names::LEAK_LOSS)?;

    let mean_efficiency = mean(efficiency)
        .ok_or_else(|| ComposeError::shape(names::BOILER_EFFICIENCY, "series has no points"))?;

    let kpis = vec![
        mean_efficiency_panel(mean_efficiency, options.recolor_mean_delta),
        scalar_kpi_panel(&style::RECOVERY_KPI, names::CONDENSATE_RECOVERY, recovery),
        scalar_kpi_panel(&style::STEAM_PER_KG_KPI, names::STEAM_PER_KG, steam_per_kg),
        scalar_kpi_panel(&style::LEAK_LOSS_KPI, names::LEAK_LOSS, leak_loss),
    ];

    let charts = vec![
        heatmap_panel(names::LEAK_SEVERITY, leak_severity)?,
        efficiency_line_panel(efficiency),
        recovery_gauge_panel(recovery)?,
        scatter_panel(steam_flow, fuel)?,
    ];

    let kpis = place(kpis, |i| Slot {
        row: 0,
        column: i as u32,
    });
    let charts = match options.variant {
        LayoutVariant::Grid => place(charts, |i| Slot {
            row: 1 + (i / 2) as u32,
            column: (i % 2) as u32,
        }),
        LayoutVariant::Columns => place(charts, |i| Slot {
            row: 1,
            column: i as u32,
        }),
    };

    Ok(Layout::new(options.title.clone(), options.variant, kpis, charts))
}

/// Heatmap height grows with the zone count; no other panel derives height from data.
/// `None` when the height does not fit in `u32` pixels.
pub fn heatmap_height(rows: usize) -> Option<u32> {
    u32::try_from(rows)
        .ok()
        .and_then(|rows| style::BASE_ROW_HEIGHT_PX.checked_mul(rows))
}

/// 1-indexed labels generated purely from a dimension, e.g. `Zone-1..Zone-n`.
pub fn axis_labels(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{}{}", prefix, i)).collect()
}

/// Alert colour iff the value is strictly negative.
pub fn text_color(value: f64) -> &'static str {
    if value < 0.0 {
        style::ALERT_COLOR
    } else {
        style::DEFAULT_TEXT_COLOR
    }
}

pub fn mean(points: &[TimeSeriesPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64)
}

pub fn format_kpi(value: f64) -> String {
    format!("{:.*}", style::KPI_PRECISION, value)
}

fn place(panels: Vec<Panel>, slot_for: impl Fn(usize) -> Slot) -> Vec<PlacedPanel> {
    panels
        .into_iter()
        .enumerate()
        .map(|(i, panel)| PlacedPanel {
            slot: slot_for(i),
            panel,
        })
        .collect()
}

fn require<'a>(snapshot: &'a Snapshot, name: &str) -> Result<&'a Measurement, ComposeError> {
    snapshot.get(name).ok_or_else(|| ComposeError::missing(name))
}

fn wrong_kind(name: &str, expected: &str, found: &Measurement) -> ComposeError {
    ComposeError::shape(
        name,
        format!("expected {}, found {}", expected, found.kind_name()),
    )
}

fn require_matrix<'a>(snapshot: &'a Snapshot, name: &str) -> Result<&'a MatrixData, ComposeError> {
    match require(snapshot, name)? {
        Measurement::Matrix(matrix) => Ok(matrix),
        other => Err(wrong_kind(name, "matrix", other)),
    }
}

fn require_series<'a>(
    snapshot: &'a Snapshot,
    name: &str,
) -> Result<&'a [TimeSeriesPoint], ComposeError> {
    match require(snapshot, name)? {
        Measurement::Series(points) => Ok(points),
        other => Err(wrong_kind(name, "series", other)),
    }
}

fn require_scalar<'a>(snapshot: &'a Snapshot, name: &str) -> Result<&'a ScalarData, ComposeError> {
    match require(snapshot, name)? {
        Measurement::Scalar(scalar) => Ok(scalar),
        other => Err(wrong_kind(name, "scalar", other)),
    }
}

fn panel(
    text: &PanelText,
    measurement: &str,
    kind: ChartKind,
    style: PanelStyle,
    body: PanelBody,
) -> Panel {
    Panel {
        id: text.id.to_string(),
        title: text.title.to_string(),
        caption: text.caption.to_string(),
        measurement: measurement.to_string(),
        kind,
        style,
        body,
    }
}

fn mean_efficiency_panel(mean: f64, recolor: bool) -> Panel {
    let delta = mean - style::EFFICIENCY_TARGET;
    let color = if recolor {
        text_color(delta)
    } else {
        style::DEFAULT_TEXT_COLOR
    };
    panel(
        &style::MEAN_EFFICIENCY_KPI,
        names::BOILER_EFFICIENCY,
        ChartKind::Text,
        PanelStyle {
            text_color: Some(color.to_string()),
            ..PanelStyle::default()
        },
        PanelBody::Text {
            value: mean,
            display: format_kpi(mean),
            unit: "%".to_string(),
            delta: Some(delta),
        },
    )
}

fn scalar_kpi_panel(text: &PanelText, name: &str, scalar: &ScalarData) -> Panel {
    panel(
        text,
        name,
        ChartKind::Text,
        PanelStyle {
            text_color: Some(text_color(scalar.value).to_string()),
            ..PanelStyle::default()
        },
        PanelBody::Text {
            value: scalar.value,
            display: format_kpi(scalar.value),
            unit: scalar.unit.clone(),
            delta: scalar.target.map(|target| scalar.value - target),
        },
    )
}

fn heatmap_panel(name: &str, matrix: &MatrixData) -> Result<Panel, ComposeError> {
    if matrix.row_count() == 0 {
        return Err(ComposeError::shape(name, "matrix has no rows"));
    }
    let columns = matrix
        .column_count()
        .ok_or_else(|| ComposeError::shape(name, "matrix rows are empty or of differing lengths"))?;
    let rows = matrix.row_count();
    let height_px = heatmap_height(rows).ok_or_else(|| {
        ComposeError::shape(name, format!("{} rows exceed the heatmap pixel height", rows))
    })?;

    Ok(panel(
        &style::HEATMAP,
        name,
        ChartKind::Heatmap,
        PanelStyle {
            color_scale: Some(style::HEATMAP_COLOR_SCALE.to_string()),
            axis_titles: Some(AxisTitles {
                x: style::HEATMAP_X_TITLE.to_string(),
                y: style::HEATMAP_Y_TITLE.to_string(),
                color: Some(style::HEATMAP_COLOR_TITLE.to_string()),
            }),
            height_px: Some(height_px),
            tick_angle: Some(style::HEATMAP_TICK_ANGLE),
            ..PanelStyle::default()
        },
        PanelBody::Heatmap {
            z: matrix.rows.clone(),
            x_labels: axis_labels(style::HEATMAP_COLUMN_PREFIX, columns),
            y_labels: axis_labels(style::HEATMAP_ROW_PREFIX, rows),
        },
    ))
}

fn efficiency_line_panel(points: &[TimeSeriesPoint]) -> Panel {
    panel(
        &style::EFFICIENCY_LINE,
        names::BOILER_EFFICIENCY,
        ChartKind::Line,
        PanelStyle {
            axis_titles: Some(AxisTitles {
                x: style::EFFICIENCY_X_TITLE.to_string(),
                y: style::EFFICIENCY_Y_TITLE.to_string(),
                color: None,
            }),
            thresholds: vec![ThresholdLine {
                label: style::TARGET_LINE_LABEL.to_string(),
                value: style::EFFICIENCY_TARGET,
                color: style::TARGET_LINE_COLOR.to_string(),
            }],
            ..PanelStyle::default()
        },
        PanelBody::Line {
            points: points.to_vec(),
        },
    )
}

fn recovery_gauge_panel(scalar: &ScalarData) -> Result<Panel, ComposeError> {
    let range = GaugeRange {
        min: style::GAUGE_MIN,
        max: style::GAUGE_MAX,
    };
    let threshold = scalar.target.unwrap_or(style::GAUGE_DEFAULT_THRESHOLD);
    if !range.contains(threshold) {
        return Err(ComposeError::shape(
            names::CONDENSATE_RECOVERY,
            format!(
                "gauge threshold {} outside range {}..{}",
                threshold, range.min, range.max
            ),
        ));
    }

    Ok(panel(
        &style::RECOVERY_GAUGE,
        names::CONDENSATE_RECOVERY,
        ChartKind::Gauge,
        PanelStyle {
            thresholds: vec![ThresholdLine {
                label: style::TARGET_LINE_LABEL.to_string(),
                value: threshold,
                color: style::ALERT_COLOR.to_string(),
            }],
            ..PanelStyle::default()
        },
        PanelBody::Gauge {
            value: scalar.value,
            range,
            threshold,
        },
    ))
}

fn scatter_panel(x: &[TimeSeriesPoint], y: &[TimeSeriesPoint]) -> Result<Panel, ComposeError> {
    if x.is_empty() {
        return Err(ComposeError::shape(names::STEAM_FLOW, "series has no points"));
    }
    if x.len() != y.len() {
        return Err(ComposeError::shape(
            names::FUEL_CONSUMPTION,
            format!(
                "scatter series lengths differ: {} has {}, {} has {}",
                names::STEAM_FLOW,
                x.len(),
                names::FUEL_CONSUMPTION,
                y.len()
            ),
        ));
    }

    let points = x.iter().zip(y).map(|(a, b)| [a.value, b.value]).collect();

    Ok(panel(
        &style::STEAM_FUEL_SCATTER,
        names::STEAM_FLOW,
        ChartKind::Scatter,
        PanelStyle {
            axis_titles: Some(AxisTitles {
                x: style::SCATTER_X_TITLE.to_string(),
                y: style::SCATTER_Y_TITLE.to_string(),
                color: None,
            }),
            ..PanelStyle::default()
        },
        PanelBody::Scatter {
            x_measurement: names::STEAM_FLOW.to_string(),
            y_measurement: names::FUEL_CONSUMPTION.to_string(),
            points,
        },
    ))
}
