//! Aggregate stream status

use serde::Serialize;

use crate::player::{DrmType, StreamId, StreamState, StreamType};

/// Snapshot of one stream, as returned by `Streamer::status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamStatus {
    pub id: StreamId,
    #[serde(rename = "type")]
    pub stream_type: StreamType,
    pub drm: DrmType,
    pub state: StreamState,
    pub metadata: String,
    /// Whether a trick-play control is attached
    pub attached: bool,
}
