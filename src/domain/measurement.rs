// Measurement domain models
use serde::{Deserialize, Serialize};

/// Names of the measurements the plant dashboard requires in every snapshot.
pub mod names {
    pub const LEAK_SEVERITY: &str = "leak_severity";
    pub const BOILER_EFFICIENCY: &str = "boiler_efficiency";
    pub const STEAM_FLOW: &str = "steam_flow";
    pub const FUEL_CONSUMPTION: &str = "fuel_consumption";
    pub const CONDENSATE_RECOVERY: &str = "condensate_recovery";
    pub const STEAM_PER_KG: &str = "steam_per_kg";
    pub const LEAK_LOSS: &str = "leak_loss";

    pub const REQUIRED: [&str; 7] = [
        LEAK_SEVERITY,
        BOILER_EFFICIENCY,
        STEAM_FLOW,
        FUEL_CONSUMPTION,
        CONDENSATE_RECOVERY,
        STEAM_PER_KG,
        LEAK_LOSS,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub time_ms: i64,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarData {
    pub value: f64,
    pub target: Option<f64>,
    pub unit: String,
}

impl ScalarData {
    pub fn new(value: f64, target: Option<f64>, unit: impl Into<String>) -> Self {
        Self {
            value,
            target,
            unit: unit.into(),
        }
    }
}

/// Severity grid, row-major. Rows are plant zones, columns pipeline sections.
///
/// Rows are stored as given so that ragged input survives until composition
/// rejects it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixData {
    pub rows: Vec<Vec<f64>>,
}

impl MatrixData {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count when every row has the same non-zero length.
    pub fn column_count(&self) -> Option<usize> {
        let first = self.rows.first()?.len();
        if first == 0 || self.rows.iter().any(|row| row.len() != first) {
            return None;
        }
        Some(first)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    Scalar(ScalarData),
    Series(Vec<TimeSeriesPoint>),
    Matrix(MatrixData),
}

impl Measurement {
    pub fn scalar(value: f64, target: Option<f64>, unit: impl Into<String>) -> Self {
        Measurement::Scalar(ScalarData::new(value, target, unit))
    }

    pub fn series(points: Vec<TimeSeriesPoint>) -> Self {
        Measurement::Series(points)
    }

    pub fn matrix(rows: Vec<Vec<f64>>) -> Self {
        Measurement::Matrix(MatrixData::new(rows))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Measurement::Scalar(_) => "scalar",
            Measurement::Series(_) => "series",
            Measurement::Matrix(_) => "matrix",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_rectangular() {
        let matrix = MatrixData::new(vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]);
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.column_count(), Some(3));
    }

    #[test]
    fn test_column_count_rejects_ragged_and_empty() {
        let ragged = MatrixData::new(vec![vec![0.1, 0.2], vec![0.3]]);
        assert_eq!(ragged.column_count(), None);

        let no_rows = MatrixData::new(Vec::new());
        assert_eq!(no_rows.column_count(), None);

        let empty_rows = MatrixData::new(vec![Vec::new(), Vec::new()]);
        assert_eq!(empty_rows.column_count(), None);
    }
}
