//! Registry configuration

use serde::Deserialize;

/// Size of the stream identifier space (`StreamId` is a `u8`)
pub const MAX_STREAM_IDS: usize = 256;

/// What `attach` does when the stream already has a control attached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachPolicy {
    /// Silently replace the previous control
    #[default]
    Replace,
    /// Fail with `Conflict`
    Reject,
}

/// Configuration for the stream registry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum number of simultaneously live streams
    pub max_streams: usize,

    /// Behavior of attach on an already attached stream
    pub attach_policy: AttachPolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_streams: MAX_STREAM_IDS,
            attach_policy: AttachPolicy::Replace,
        }
    }
}

impl RegistryConfig {
    /// Set the stream limit, clamped to `1..=256`
    pub fn max_streams(mut self, max: usize) -> Self {
        self.max_streams = max.clamp(1, MAX_STREAM_IDS);
        self
    }

    /// Set the attach policy
    pub fn attach_policy(mut self, policy: AttachPolicy) -> Self {
        self.attach_policy = policy;
        self
    }

    /// Effective stream limit
    ///
    /// Values loaded from a host configuration are not clamped on the way in.
    pub fn stream_limit(&self) -> usize {
        self.max_streams.clamp(1, MAX_STREAM_IDS)
    }
}
