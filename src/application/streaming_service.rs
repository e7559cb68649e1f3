// Streaming dashboard service - Progressive panel delivery
use crate::application::dashboard_service::{DashboardError, DashboardService};
use crate::domain::layout::LayoutVariant;
use crate::domain::stream::{CompletionEvent, DashboardSkeleton, StreamMessage};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

const CHANNEL_CAPACITY: usize = 100;

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard_service: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboard_service: DashboardService) -> Self {
        Self { dashboard_service }
    }

    /// Composes the whole layout up front, so a failed composition surfaces
    /// here as an error and never as a truncated stream.
    pub async fn stream_dashboard(
        &self,
        seed: Option<u64>,
        variant: Option<LayoutVariant>,
    ) -> Result<mpsc::Receiver<StreamMessage>, DashboardError> {
        let start_time = Instant::now();
        let layout = self.dashboard_service.get_dashboard(seed, variant).await?;

        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

        // 1. Skeleton first, so clients can reserve every slot
        let skeleton = DashboardSkeleton::from_layout(&layout);
        let total_panels = layout.panel_count();
        let _ = tx.send(StreamMessage::Skeleton(skeleton)).await;

        // 2. One task per panel; panels are independent so arrival order is free
        tokio::spawn(async move {
            let mut tasks = JoinSet::new();
            for placed in layout.kpis.into_iter().chain(layout.charts) {
                let tx = tx.clone();
                tasks.spawn(async move {
                    let _ = tx.send(StreamMessage::Panel(placed)).await;
                });
            }

            while let Some(joined) = tasks.join_next().await {
                if let Err(e) = joined {
                    tracing::error!("Panel delivery task failed: {}", e);
                }
            }

            // 3. Completion only after every panel has been handed over
            let duration_ms = start_time.elapsed().as_millis() as u64;
            tracing::debug!(total_panels, duration_ms, "Dashboard stream complete");
            let complete = CompletionEvent {
                total_panels,
                duration_ms,
            };
            let _ = tx.send(StreamMessage::Complete(complete)).await;
        });

        Ok(rx)
    }
}
