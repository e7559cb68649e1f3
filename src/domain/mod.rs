// Domain layer - Measurements, panels and layouts, free of I/O
pub mod error;
pub mod layout;
pub mod measurement;
pub mod panel;
pub mod snapshot;
pub mod stream;
pub mod style;
