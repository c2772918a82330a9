//! Value types shared between the streamer and player implementations
//!
//! Everything here is plain data: identifiers, enumerations and the small
//! structs passed across the [`Stream`](super::Stream) boundary.

use serde::{Deserialize, Serialize};

/// Identifier of a live stream session
///
/// Unique among live sessions only; a destroyed session's identifier may be
/// handed out again by a later create.
pub type StreamId = u8;

/// Category of stream a player can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamType {
    Undefined,
    Cable,
    Handheld,
    Satellite,
    Terrestrial,
    Dab,
    Rf,
    Unicast,
    Multicast,
    Ip,
    Streaming,
}

impl StreamType {
    /// Stable text tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamType::Undefined => "Undefined",
            StreamType::Cable => "Cable",
            StreamType::Handheld => "Handheld",
            StreamType::Satellite => "Satellite",
            StreamType::Terrestrial => "Terrestrial",
            StreamType::Dab => "DAB",
            StreamType::Rf => "RF",
            StreamType::Unicast => "Unicast",
            StreamType::Multicast => "Multicast",
            StreamType::Ip => "IP",
            StreamType::Streaming => "Streaming",
        }
    }
}

impl std::fmt::Display for StreamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playback state reported by a stream
///
/// The streamer never computes these; it only relays what the player reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamState {
    /// Created, nothing loaded
    Idle,
    /// Load in progress
    Loading,
    /// Loaded, ready to be controlled
    Prepared,
    /// Media is playing
    Playing,
    /// Media is paused
    Paused,
    /// Player reported a failure
    Error,
}

impl StreamState {
    /// Stable text tag used in notifications
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamState::Idle => "Idle",
            StreamState::Loading => "Loading",
            StreamState::Prepared => "Prepared",
            StreamState::Playing => "Playing",
            StreamState::Paused => "Paused",
            StreamState::Error => "Error",
        }
    }
}

impl std::fmt::Display for StreamState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DRM system protecting a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrmType {
    None,
    ClearKey,
    PlayReady,
    Widevine,
    Unknown,
}

impl DrmType {
    /// Map a raw DRM status code reported by a player
    ///
    /// Total: every code outside the known range is `Unknown`.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => DrmType::None,
            1 => DrmType::ClearKey,
            2 => DrmType::PlayReady,
            3 => DrmType::Widevine,
            _ => DrmType::Unknown,
        }
    }

    /// Raw code for this DRM type
    pub fn code(&self) -> u32 {
        match self {
            DrmType::None => 0,
            DrmType::ClearKey => 1,
            DrmType::PlayReady => 2,
            DrmType::Widevine => 3,
            DrmType::Unknown => 4,
        }
    }

    /// Stable text tag used in notifications
    pub fn as_str(&self) -> &'static str {
        match self {
            DrmType::None => "None",
            DrmType::ClearKey => "ClearKey",
            DrmType::PlayReady => "PlayReady",
            DrmType::Widevine => "Widevine",
            DrmType::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for DrmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display placement of a stream's video window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    /// Create a geometry from its five components
    pub fn new(x: u32, y: u32, z: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            z,
            width,
            height,
        }
    }
}

/// Parameters of a load command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Location of the media to load
    pub url: String,
    /// Start of the playable range
    pub begin: Option<u64>,
    /// End of the playable range
    pub end: Option<u64>,
    /// Wall-clock time to align playback to
    pub absolute_time: Option<u64>,
}

impl LoadRequest {
    /// Load a URL without range parameters
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            begin: None,
            end: None,
            absolute_time: None,
        }
    }

    /// Restrict playback to `begin..end`
    pub fn range(mut self, begin: u64, end: u64) -> Self {
        self.begin = Some(begin);
        self.end = Some(end);
        self
    }

    /// Align playback to an absolute time
    pub fn absolute_time(mut self, time: u64) -> Self {
        self.absolute_time = Some(time);
        self
    }

    /// Whether any range parameter is present
    pub fn has_range(&self) -> bool {
        self.begin.is_some() || self.end.is_some() || self.absolute_time.is_some()
    }
}

/// Failure reported by a player implementation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// The handle rejected the given parameters
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The handle does not implement the operation
    #[error("operation not supported by player")]
    Unsupported,

    /// The handle could not carry out the operation right now
    #[error("player unavailable: {0}")]
    Unavailable(String),
}
