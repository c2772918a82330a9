//! Statistics

pub mod metrics;

pub use metrics::{RegistryStats, RouterStats, StreamerStats};
