// Seeded synthetic snapshot source - stands in for live plant readings
use crate::application::snapshot_source::SnapshotSource;
use crate::domain::measurement::{names, Measurement, TimeSeriesPoint};
use crate::domain::snapshot::Snapshot;
use crate::infrastructure::config::{NormalSettings, ScalarSettings, SourceSettings};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone)]
pub struct SyntheticSource {
    settings: SourceSettings,
    start_ms: i64,
}

impl SyntheticSource {
    pub fn new(settings: SourceSettings) -> Result<Self> {
        let start = NaiveDate::parse_from_str(&settings.start_date, "%Y-%m-%d")
            .with_context(|| format!("Invalid source start_date '{}'", settings.start_date))?;
        let start_ms = start.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
        Ok(Self { settings, start_ms })
    }

    /// Same seed, same measurements. Only `taken_at_ms` varies between calls.
    pub fn generate(&self, seed: u64, taken_at_ms: i64) -> Snapshot {
        let s = &self.settings;
        let mut rng = StdRng::seed_from_u64(seed);

        let leak_severity: Vec<Vec<f64>> = (0..s.matrix_rows)
            .map(|_| (0..s.matrix_columns).map(|_| rng.random::<f64>()).collect())
            .collect();
        let efficiency = self.daily_series(&mut rng, s.boiler_efficiency);
        let steam_flow = self.daily_series(&mut rng, s.steam_flow);
        let fuel = self.daily_series(&mut rng, s.fuel_consumption);

        Snapshot::new(taken_at_ms)
            .with(names::LEAK_SEVERITY, Measurement::matrix(leak_severity))
            .with(names::BOILER_EFFICIENCY, Measurement::series(efficiency))
            .with(names::STEAM_FLOW, Measurement::series(steam_flow))
            .with(names::FUEL_CONSUMPTION, Measurement::series(fuel))
            .with(names::CONDENSATE_RECOVERY, scalar(&s.condensate_recovery))
            .with(names::STEAM_PER_KG, scalar(&s.steam_per_kg))
            .with(names::LEAK_LOSS, scalar(&s.leak_loss))
    }

    fn daily_series(&self, rng: &mut StdRng, dist: NormalSettings) -> Vec<TimeSeriesPoint> {
        (0..self.settings.series_length)
            .map(|day| {
                TimeSeriesPoint::new(self.start_ms + day as i64 * MS_PER_DAY, normal(rng, dist))
            })
            .collect()
    }
}

#[async_trait]
impl SnapshotSource for SyntheticSource {
    async fn snapshot(&self, seed: Option<u64>) -> Result<Snapshot> {
        let seed = seed.unwrap_or(self.settings.seed);
        tracing::debug!(seed, "Generating synthetic snapshot");
        Ok(self.generate(seed, Utc::now().timestamp_millis()))
    }
}

fn scalar(settings: &ScalarSettings) -> Measurement {
    Measurement::scalar(settings.value, settings.target, settings.unit.clone())
}

/// Box-Muller draw. `1 - u` keeps the log argument in (0, 1].
fn normal(rng: &mut StdRng, dist: NormalSettings) -> f64 {
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    dist.mean + dist.std_dev * z
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::composer::Composer;
    use crate::domain::measurement::MatrixData;

    fn source() -> SyntheticSource {
        SyntheticSource::new(SourceSettings::default()).unwrap()
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        let source = source();
        assert_eq!(source.generate(42, 0), source.generate(42, 0));
        assert_ne!(source.generate(42, 0), source.generate(43, 0));
    }

    #[test]
    fn test_default_shapes() {
        let snapshot = source().generate(42, 0);

        match snapshot.get(names::LEAK_SEVERITY) {
            Some(Measurement::Matrix(MatrixData { rows })) => {
                assert_eq!(rows.len(), 10);
                assert!(rows.iter().all(|r| r.len() == 10));
                assert!(rows.iter().flatten().all(|v| (0.0..1.0).contains(v)));
            }
            other => panic!("unexpected leak severity {:?}", other),
        }

        match snapshot.get(names::BOILER_EFFICIENCY) {
            Some(Measurement::Series(points)) => {
                assert_eq!(points.len(), 100);
                assert_eq!(points[1].time_ms - points[0].time_ms, MS_PER_DAY);
                // 2024-01-01T00:00:00Z
                assert_eq!(points[0].time_ms, 1_704_067_200_000);
            }
            other => panic!("unexpected efficiency {:?}", other),
        }

        assert_eq!(
            snapshot.get(names::LEAK_LOSS),
            Some(&Measurement::scalar(3.5, None, "%"))
        );
    }

    #[test]
    fn test_normal_draws_center_on_mean() {
        let mut rng = StdRng::seed_from_u64(1);
        let dist = NormalSettings {
            mean: 85.0,
            std_dev: 2.0,
        };
        let n = 5_000;
        let avg = (0..n).map(|_| normal(&mut rng, dist)).sum::<f64>() / n as f64;
        assert!((avg - 85.0).abs() < 0.2, "sample mean {}", avg);
    }

    #[test]
    fn test_generated_snapshot_composes() {
        let layout = Composer::default().compose(&source().generate(42, 0)).unwrap();
        assert_eq!(layout.panel_count(), 8);
    }

    #[test]
    fn test_rejects_bad_start_date() {
        let settings = SourceSettings {
            start_date: "01/01/2024".to_string(),
            ..SourceSettings::default()
        };
        assert!(SyntheticSource::new(settings).is_err());
    }

    #[tokio::test]
    async fn test_seed_override() {
        let source = source();
        let a = source.snapshot(Some(5)).await.unwrap();
        let b = source.snapshot(Some(5)).await.unwrap();
        assert_eq!(a.get(names::STEAM_FLOW), b.get(names::STEAM_FLOW));
    }
}
