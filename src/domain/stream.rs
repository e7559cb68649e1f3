// Progressive delivery messages
use super::layout::{Layout, LayoutVariant, PlacedPanel, Slot};
use super::panel::ChartKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSkeleton {
    pub id: String,
    pub title: String,
    pub caption: String,
    pub kind: ChartKind,
    pub slot: Slot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSkeleton {
    pub title: String,
    pub variant: LayoutVariant,
    pub rows: u32,
    pub columns: u32,
    pub panels: Vec<PanelSkeleton>,
}

impl DashboardSkeleton {
    pub fn from_layout(layout: &Layout) -> Self {
        let panels = layout
            .panels()
            .map(|p| PanelSkeleton {
                id: p.panel.id.clone(),
                title: p.panel.title.clone(),
                caption: p.panel.caption.clone(),
                kind: p.panel.kind,
                slot: p.slot,
            })
            .collect();
        Self {
            title: layout.title.clone(),
            variant: layout.variant,
            rows: layout.rows,
            columns: layout.columns,
            panels,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub total_panels: usize,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamMessage {
    Skeleton(DashboardSkeleton),
    Panel(PlacedPanel),
    Complete(CompletionEvent),
}
