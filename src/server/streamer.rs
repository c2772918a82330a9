//! Command dispatcher
//!
//! One method per externally addressable verb. Each validates the stream
//! identifier against the registry, then delegates a single call to the
//! stream's handle or attached control.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::config::StreamerConfig;
use super::status::StreamStatus;
use crate::error::{Error, Result};
use crate::notify::{Notification, NotificationRouter};
use crate::player::{
    DrmType, Geometry, LoadRequest, Player, PlayerError, StreamControl, StreamId, StreamState,
    StreamType,
};
use crate::registry::StreamRegistry;
use crate::stats::StreamerStats;

/// Stream multiplexer
///
/// Owns the registry and notification router for one player. Dropping the
/// streamer releases every stream handle that is still live.
pub struct Streamer<P: Player> {
    config: StreamerConfig,
    player: Arc<P>,
    registry: Arc<StreamRegistry>,
    router: Arc<NotificationRouter>,
}

impl<P: Player> Streamer<P> {
    /// Create a streamer driving `player`
    pub fn new(config: StreamerConfig, player: P) -> Self {
        let router = Arc::new(NotificationRouter::new(config.notification_capacity));
        let registry = Arc::new(StreamRegistry::with_config(
            config.registry.clone(),
            Arc::clone(&router),
        ));

        Self {
            config,
            player: Arc::new(player),
            registry,
            router,
        }
    }

    pub fn config(&self) -> &StreamerConfig {
        &self.config
    }

    pub fn player(&self) -> &Arc<P> {
        &self.player
    }

    /// Get a reference to the stream registry
    pub fn registry(&self) -> &Arc<StreamRegistry> {
        &self.registry
    }

    pub fn router(&self) -> &Arc<NotificationRouter> {
        &self.router
    }

    /// Subscribe to notifications from every stream
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.router.subscribe()
    }

    /// Create a stream of `stream_type` and return its identifier
    pub async fn create(&self, stream_type: StreamType) -> Result<StreamId> {
        self.create_stream(stream_type, self.config.default_geometry)
            .await
    }

    /// Create a stream placed at `geometry`
    pub async fn create_with_geometry(
        &self,
        stream_type: StreamType,
        geometry: Geometry,
    ) -> Result<StreamId> {
        self.create_stream(stream_type, Some(geometry)).await
    }

    async fn create_stream(
        &self,
        stream_type: StreamType,
        geometry: Option<Geometry>,
    ) -> Result<StreamId> {
        let handle = self.player.create_stream(stream_type, geometry);
        if handle.is_none() {
            tracing::warn!(stream_type = %stream_type, "Player could not create stream");
        }

        let id = self.registry.create(handle).await?;
        tracing::debug!(stream_id = id, stream_type = %stream_type, "Stream ready");

        Ok(id)
    }

    /// Destroy a stream
    pub async fn destroy(&self, id: StreamId) -> Result<()> {
        self.registry.destroy(id).await
    }

    /// Start loading media
    ///
    /// Returns as soon as the handle accepted the request; progress is
    /// reported through state notifications.
    pub async fn load(&self, id: StreamId, request: LoadRequest) -> Result<()> {
        let proxy = self.registry.lookup(id).await?;

        if request.url.is_empty() {
            return Err(Error::InvalidArgument("url is empty".into()));
        }
        if let (Some(begin), Some(end)) = (request.begin, request.end) {
            if begin > end {
                return Err(Error::InvalidArgument(format!(
                    "begin {} is past end {}",
                    begin, end
                )));
            }
        }

        proxy
            .with_handle(|handle| handle.load(&request))?
            .map_err(|e| match e {
                PlayerError::InvalidArgument(reason) => Error::InvalidArgument(reason),
                other => Error::Player(other),
            })?;

        tracing::debug!(stream_id = id, url = %request.url, "Load started");
        Ok(())
    }

    /// Attach the stream's trick-play control and hand it back
    ///
    /// The control only reports capabilities (speeds, playable range). Speed
    /// and position are always driven through the stream itself, attached or
    /// not.
    pub async fn attach(&self, id: StreamId) -> Result<Arc<dyn StreamControl>> {
        self.registry.attach(id).await
    }

    /// Detach the stream's trick-play control
    pub async fn detach(&self, id: StreamId) -> Result<()> {
        self.registry.detach(id).await
    }

    pub async fn speed(&self, id: StreamId) -> Result<i32> {
        self.registry.with_handle(id, |h| h.speed()).await
    }

    pub async fn set_speed(&self, id: StreamId, speed: i32) -> Result<()> {
        self.registry
            .with_handle(id, |h| h.set_speed(speed))
            .await??;
        tracing::debug!(stream_id = id, speed = speed, "Speed set");
        Ok(())
    }

    pub async fn position(&self, id: StreamId) -> Result<u64> {
        self.registry.with_handle(id, |h| h.position()).await
    }

    pub async fn set_position(&self, id: StreamId, position: u64) -> Result<()> {
        self.registry
            .with_handle(id, |h| h.set_position(position))
            .await??;
        tracing::debug!(stream_id = id, position = position, "Position set");
        Ok(())
    }

    pub async fn window(&self, id: StreamId) -> Result<Geometry> {
        self.registry.with_handle(id, |h| h.geometry()).await
    }

    pub async fn set_window(&self, id: StreamId, geometry: Geometry) -> Result<()> {
        self.registry
            .with_handle(id, |h| h.set_geometry(geometry))
            .await??;
        tracing::debug!(stream_id = id, window = ?geometry, "Window set");
        Ok(())
    }

    /// Identifiers of all live streams, ascending
    pub async fn streams(&self) -> std::vec::IntoIter<StreamId> {
        self.registry.list().await
    }

    pub async fn stream_type(&self, id: StreamId) -> Result<StreamType> {
        self.registry.with_handle(id, |h| h.stream_type()).await
    }

    pub async fn drm(&self, id: StreamId) -> Result<DrmType> {
        self.registry.with_handle(id, |h| h.drm()).await
    }

    pub async fn state(&self, id: StreamId) -> Result<StreamState> {
        self.registry.with_handle(id, |h| h.state()).await
    }

    pub async fn metadata(&self, id: StreamId) -> Result<String> {
        self.registry.with_handle(id, |h| h.metadata()).await
    }

    /// Type, DRM, state and metadata of a stream in one call
    ///
    /// Taken as one snapshot: no destroy, attach or detach lands in between.
    pub async fn status(&self, id: StreamId) -> Result<StreamStatus> {
        self.registry
            .inspect(id, |handle, attached| StreamStatus {
                id,
                stream_type: handle.stream_type(),
                drm: handle.drm(),
                state: handle.state(),
                metadata: handle.metadata(),
                attached,
            })
            .await
    }

    /// Speeds supported by the attached control
    pub async fn speeds(&self, id: StreamId) -> Result<Vec<i32>> {
        Ok(self.registry.control(id).await?.speeds())
    }

    /// Playable range reported by the attached control
    pub async fn time_range(&self, id: StreamId) -> Result<(u64, u64)> {
        Ok(self.registry.control(id).await?.time_range())
    }

    pub async fn stats(&self) -> StreamerStats {
        StreamerStats::new(self.registry.stats().await, self.router.stats())
    }

    /// Destroy every live stream
    ///
    /// Returns the number of streams destroyed.
    pub async fn shutdown(&self) -> usize {
        let count = self.registry.clear().await;
        tracing::info!(streams = count, "Streamer shut down");
        count
    }
}
