// Presentation constants, kept apart from the composition rules

pub const BASE_ROW_HEIGHT_PX: u32 = 50;
pub const EFFICIENCY_TARGET: f64 = 85.0;

pub const ALERT_COLOR: &str = "red";
pub const DEFAULT_TEXT_COLOR: &str = "inherit";

pub const HEATMAP_COLOR_SCALE: &str = "RdYlGn_r";
pub const HEATMAP_TICK_ANGLE: i32 = 45;
pub const HEATMAP_COLUMN_PREFIX: &str = "Sec-";
pub const HEATMAP_ROW_PREFIX: &str = "Zone-";

pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 100.0;
/// Used when the gauge measurement carries no target of its own.
pub const GAUGE_DEFAULT_THRESHOLD: f64 = 80.0;

pub const KPI_PRECISION: usize = 2;

pub struct PanelText {
    pub id: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub const HEATMAP: PanelText = PanelText {
    id: "leak-heatmap",
    title: "Leak Detection Heatmap",
    caption: "Visualizes leak severity across plant zones and pipeline sections for quick maintenance prioritization.",
};
pub const HEATMAP_X_TITLE: &str = "Pipeline Sections";
pub const HEATMAP_Y_TITLE: &str = "Plant Zones";
pub const HEATMAP_COLOR_TITLE: &str = "Leak Severity";

pub const EFFICIENCY_LINE: PanelText = PanelText {
    id: "efficiency-trend",
    title: "Boiler Efficiency Over Time",
    caption: "Daily boiler efficiency against the 85% operating target.",
};
pub const EFFICIENCY_X_TITLE: &str = "Date";
pub const EFFICIENCY_Y_TITLE: &str = "Efficiency (%)";
pub const TARGET_LINE_LABEL: &str = "Target";
pub const TARGET_LINE_COLOR: &str = "green";

pub const RECOVERY_GAUGE: PanelText = PanelText {
    id: "condensate-gauge",
    title: "Condensate Recovery",
    caption: "Share of condensate returned to the boiler house.",
};

pub const STEAM_FUEL_SCATTER: PanelText = PanelText {
    id: "steam-vs-fuel",
    title: "Steam Flow vs Fuel Consumption",
    caption: "Each point is one day; drift from the main cluster hints at combustion or trap losses.",
};
pub const SCATTER_X_TITLE: &str = "Steam Flow (t/h)";
pub const SCATTER_Y_TITLE: &str = "Fuel Consumption (t/h)";

pub const MEAN_EFFICIENCY_KPI: PanelText = PanelText {
    id: "kpi-mean-efficiency",
    title: "Avg Boiler Efficiency",
    caption: "Mean of the efficiency series.",
};
pub const RECOVERY_KPI: PanelText = PanelText {
    id: "kpi-condensate-recovery",
    title: "Condensate Recovery",
    caption: "Percent of condensate recovered.",
};
pub const STEAM_PER_KG_KPI: PanelText = PanelText {
    id: "kpi-steam-per-kg",
    title: "Steam per kg Fuel",
    caption: "Kilograms of steam raised per kilogram of fuel.",
};
pub const LEAK_LOSS_KPI: PanelText = PanelText {
    id: "kpi-leak-loss",
    title: "Leak Loss",
    caption: "Steam lost to leaks, percent of generation.",
};
