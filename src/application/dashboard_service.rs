// Dashboard service - Use case for building a layout from a fresh snapshot
use crate::application::composer::{ComposeOptions, Composer};
use crate::application::snapshot_source::SnapshotSource;
use crate::domain::error::ComposeError;
use crate::domain::layout::{Layout, LayoutVariant};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Compose(#[from] ComposeError),
    #[error("snapshot source failed: {0:#}")]
    Source(anyhow::Error),
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn SnapshotSource>,
    composer: Composer,
}

impl DashboardService {
    pub fn new(source: Arc<dyn SnapshotSource>, options: ComposeOptions) -> Self {
        Self {
            source,
            composer: Composer::new(options),
        }
    }

    /// One render pass: fetch a snapshot, compose it, drop it.
    pub async fn get_dashboard(
        &self,
        seed: Option<u64>,
        variant: Option<LayoutVariant>,
    ) -> Result<Layout, DashboardError> {
        let snapshot = self
            .source
            .snapshot(seed)
            .await
            .map_err(DashboardError::Source)?;

        tracing::debug!(
            measurements = snapshot.len(),
            names = ?snapshot.names().collect::<Vec<_>>(),
            taken_at_ms = snapshot.taken_at_ms(),
            "Snapshot ready"
        );

        let result = match variant {
            Some(variant) => self.composer.with_variant(variant).compose(&snapshot),
            None => self.composer.compose(&snapshot),
        };

        match result {
            Ok(layout) => {
                tracing::info!(
                    panels = layout.panel_count(),
                    variant = ?layout.variant,
                    "Composed dashboard"
                );
                Ok(layout)
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), "Composition failed: {}", e);
                Err(e.into())
            }
        }
    }
}
