//! Streamer configuration

use serde::Deserialize;

use crate::player::Geometry;
use crate::registry::{AttachPolicy, RegistryConfig};

/// Streamer configuration options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StreamerConfig {
    /// Stream registry settings
    pub registry: RegistryConfig,

    /// Notifications buffered per subscriber before it starts lagging
    pub notification_capacity: usize,

    /// Window placement requested for newly created streams
    pub default_geometry: Option<Geometry>,
}

impl Default for StreamerConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            notification_capacity: 256,
            default_geometry: None,
        }
    }
}

impl StreamerConfig {
    /// Parse a configuration from the host's JSON configuration block
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Set maximum concurrent streams
    pub fn max_streams(mut self, max: usize) -> Self {
        self.registry = self.registry.max_streams(max);
        self
    }

    /// Set the attach policy
    pub fn attach_policy(mut self, policy: AttachPolicy) -> Self {
        self.registry = self.registry.attach_policy(policy);
        self
    }

    /// Set the per-subscriber notification buffer
    pub fn notification_capacity(mut self, capacity: usize) -> Self {
        self.notification_capacity = capacity.max(1);
        self
    }

    /// Set the window placement for new streams
    pub fn default_geometry(mut self, geometry: Geometry) -> Self {
        self.default_geometry = Some(geometry);
        self
    }
}
