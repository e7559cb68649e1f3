// Layout domain model
use super::panel::Panel;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Slot arrangements the dashboard has shipped with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    /// KPI strip on row 0, then charts in a 2x2 grid.
    #[default]
    Grid,
    /// Four KPI columns on row 0, then four chart columns on row 1.
    Columns,
}

impl FromStr for LayoutVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(LayoutVariant::Grid),
            "columns" => Ok(LayoutVariant::Columns),
            other => Err(format!("unknown layout variant '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub row: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPanel {
    pub slot: Slot,
    pub panel: Panel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub variant: LayoutVariant,
    pub rows: u32,
    pub columns: u32,
    pub kpis: Vec<PlacedPanel>,
    pub charts: Vec<PlacedPanel>,
}

impl Layout {
    pub fn new(
        title: String,
        variant: LayoutVariant,
        kpis: Vec<PlacedPanel>,
        charts: Vec<PlacedPanel>,
    ) -> Self {
        let all = kpis.iter().chain(charts.iter());
        let rows = all.clone().map(|p| p.slot.row + 1).max().unwrap_or(0);
        let columns = all.map(|p| p.slot.column + 1).max().unwrap_or(0);
        Self {
            title,
            variant,
            rows,
            columns,
            kpis,
            charts,
        }
    }

    pub fn panels(&self) -> impl Iterator<Item = &PlacedPanel> {
        self.kpis.iter().chain(self.charts.iter())
    }

    pub fn panel_count(&self) -> usize {
        self.kpis.len() + self.charts.len()
    }
}
