// Composition errors
use thiserror::Error;

/// Failure of a whole composition pass. No partial layout accompanies it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    /// A required measurement is absent from the snapshot.
    #[error("missing measurement '{name}'")]
    MissingMeasurement { name: String },
    /// A measurement cannot be given the shape its panel needs.
    #[error("shape mismatch in '{name}': {reason}")]
    ShapeMismatch { name: String, reason: String },
}

impl ComposeError {
    pub fn missing(name: &str) -> Self {
        ComposeError::MissingMeasurement {
            name: name.to_string(),
        }
    }

    pub fn shape(name: &str, reason: impl Into<String>) -> Self {
        ComposeError::ShapeMismatch {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable kind for API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ComposeError::MissingMeasurement { .. } => "missing_measurement",
            ComposeError::ShapeMismatch { .. } => "shape_mismatch",
        }
    }
}
