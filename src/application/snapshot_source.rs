// Source trait for measurement snapshots
use crate::domain::snapshot::Snapshot;
use async_trait::async_trait;

#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Produce the snapshot for one render pass.
    /// `seed` overrides the source's configured seed where the source is seeded.
    async fn snapshot(&self, seed: Option<u64>) -> anyhow::Result<Snapshot>;
}
