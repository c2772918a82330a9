//! Player capabilities consumed by the streamer
//!
//! The streamer does not decode, tune or render anything itself. It drives
//! whatever player implementation the host plugs in through these traits:
//!
//! - [`Player`] creates stream handles
//! - [`Stream`] is one reference-counted session handle (`Arc<dyn Stream>`)
//! - [`StreamControl`] is the optional trick-play capability of a handle
//! - [`StreamObserver`] is the callback interface a handle pushes events into
//!
//! Handles may invoke their observer from any thread, at any time, until the
//! observer is cleared with `set_observer(None)`.

pub mod types;

use std::sync::Arc;

pub use types::{DrmType, Geometry, LoadRequest, PlayerError, StreamId, StreamState, StreamType};

/// Factory for stream handles
pub trait Player: Send + Sync {
    /// Create a new stream handle
    ///
    /// Returns `None` if the player cannot provide a stream of this type.
    fn create_stream(
        &self,
        stream_type: StreamType,
        geometry: Option<Geometry>,
    ) -> Option<Arc<dyn Stream>>;
}

/// Control surface of one playback session
pub trait Stream: Send + Sync {
    /// Type this stream was created with
    fn stream_type(&self) -> StreamType;

    /// Current DRM system
    fn drm(&self) -> DrmType;

    /// Current playback state
    fn state(&self) -> StreamState;

    /// Free-form metadata text
    fn metadata(&self) -> String {
        String::new()
    }

    /// Begin loading media; completion is reported through state changes
    fn load(&self, request: &LoadRequest) -> Result<(), PlayerError>;

    fn speed(&self) -> i32;

    fn set_speed(&self, speed: i32) -> Result<(), PlayerError>;

    fn position(&self) -> u64;

    fn set_position(&self, position: u64) -> Result<(), PlayerError>;

    fn geometry(&self) -> Geometry;

    fn set_geometry(&self, geometry: Geometry) -> Result<(), PlayerError>;

    /// Install or clear (`None`) the event observer
    ///
    /// After `set_observer(None)` returns the handle must not start new
    /// callbacks on the previous observer.
    fn set_observer(&self, observer: Option<Arc<dyn StreamObserver>>);

    /// Trick-play capability, if this handle offers one
    fn control(&self) -> Option<Arc<dyn StreamControl>> {
        None
    }
}

/// Trick-play capability of a stream
pub trait StreamControl: Send + Sync {
    /// Playback speeds the stream supports
    fn speeds(&self) -> Vec<i32>;

    /// Playable range as `(begin, end)`
    fn time_range(&self) -> (u64, u64);
}

/// Callback interface a stream pushes its events into
pub trait StreamObserver: Send + Sync {
    fn on_drm(&self, code: u32);

    fn on_state_change(&self, state: StreamState);

    fn on_time_update(&self, position: u64);
}
