// Application layer - Composition and the use cases built on it
pub mod composer;
pub mod dashboard_service;
pub mod snapshot_source;
pub mod streaming_service;
