// Panel domain models - render-ready bindings of one measurement to one chart
use super::measurement::TimeSeriesPoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Heatmap,
    Line,
    Gauge,
    Scatter,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitles {
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdLine {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeRange {
    pub min: f64,
    pub max: f64,
}

impl GaugeRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_titles: Option<AxisTitles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_px: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_angle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thresholds: Vec<ThresholdLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelBody {
    Heatmap {
        z: Vec<Vec<f64>>,
        x_labels: Vec<String>,
        y_labels: Vec<String>,
    },
    Line {
        points: Vec<TimeSeriesPoint>,
    },
    Gauge {
        value: f64,
        range: GaugeRange,
        threshold: f64,
    },
    Scatter {
        x_measurement: String,
        y_measurement: String,
        points: Vec<[f64; 2]>,
    },
    Text {
        value: f64,
        display: String,
        unit: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        delta: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    pub title: String,
    pub caption: String,
    pub measurement: String,
    pub kind: ChartKind,
    pub style: PanelStyle,
    pub body: PanelBody,
}
