//! Stream registry implementation
//!
//! The single source of truth for which streams exist. Owns identifier
//! allocation, the stream proxies and the attached controls.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::config::RegistryConfig;
use super::controls::ControlRegistry;
use crate::error::{Error, Result};
use crate::notify::NotificationRouter;
use crate::player::{Stream, StreamControl, StreamId};
use crate::session::StreamProxy;
use crate::stats::RegistryStats;

/// State guarded by the registry lock
#[derive(Default)]
struct RegistryState {
    streams: BTreeMap<StreamId, Arc<StreamProxy>>,
    controls: ControlRegistry,
}

impl RegistryState {
    /// Lowest identifier below `limit` that is not live
    fn free_id(&self, limit: usize) -> Option<StreamId> {
        (0..limit)
            .filter_map(|id| StreamId::try_from(id).ok())
            .find(|id| !self.streams.contains_key(id))
    }
}

/// Central registry of live streams
///
/// The lock covers structural changes only. Lookups hand out an
/// `Arc<StreamProxy>` and release the lock, so commands on different streams
/// never wait on each other.
pub struct StreamRegistry {
    state: RwLock<RegistryState>,
    router: Arc<NotificationRouter>,
    config: RegistryConfig,
    created: AtomicU64,
    destroyed: AtomicU64,
}

impl StreamRegistry {
    /// Create a registry with default configuration
    pub fn new(router: Arc<NotificationRouter>) -> Self {
        Self::with_config(RegistryConfig::default(), router)
    }

    /// Create a registry with custom configuration
    pub fn with_config(config: RegistryConfig, router: Arc<NotificationRouter>) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            router,
            config,
            created: AtomicU64::new(0),
            destroyed: AtomicU64::new(0),
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Router the stream sinks publish into
    pub fn router(&self) -> &Arc<NotificationRouter> {
        &self.router
    }

    /// Register a stream handle under the lowest free identifier
    ///
    /// Fails with `InvalidArgument` for a missing handle and with
    /// `ResourceExhausted` when every identifier is live. On failure the
    /// handle is dropped without an observer ever being installed.
    pub async fn create(&self, implementation: Option<Arc<dyn Stream>>) -> Result<StreamId> {
        let handle = implementation
            .ok_or_else(|| Error::InvalidArgument("missing stream implementation".into()))?;

        let mut state = self.state.write().await;
        let limit = self.config.stream_limit();

        let Some(id) = state.free_id(limit) else {
            tracing::warn!(limit = limit, "Stream rejected: no free identifier");
            return Err(Error::ResourceExhausted(limit));
        };

        let proxy = StreamProxy::new(id, handle, Arc::clone(&self.router));
        state.streams.insert(id, Arc::new(proxy));
        self.created.fetch_add(1, Ordering::Relaxed);

        tracing::info!(
            stream_id = id,
            streams = state.streams.len(),
            "Stream created"
        );

        Ok(id)
    }

    /// Destroy a stream
    ///
    /// Removes the entry and its control, clears the handle's observer and
    /// releases the handle, all before the identifier can be handed out again.
    pub async fn destroy(&self, id: StreamId) -> Result<()> {
        let mut state = self.state.write().await;

        let proxy = state.streams.remove(&id).ok_or(Error::NotFound(id))?;
        let had_control = state.controls.remove(id);
        proxy.release();
        self.destroyed.fetch_add(1, Ordering::Relaxed);

        tracing::info!(
            stream_id = id,
            had_control = had_control,
            age_ms = proxy.age().as_millis() as u64,
            streams = state.streams.len(),
            "Stream destroyed"
        );

        Ok(())
    }

    /// Look up a live stream
    ///
    /// The proxy stays usable after a concurrent destroy, but its handle is
    /// gone and every call through it fails with `NotFound`.
    pub async fn lookup(&self, id: StreamId) -> Result<Arc<StreamProxy>> {
        let state = self.state.read().await;

        state.streams.get(&id).cloned().ok_or(Error::NotFound(id))
    }

    /// Run `f` against the handle of a live stream
    ///
    /// A destroy racing with `f` waits for it to return before releasing the
    /// handle.
    pub async fn with_handle<R>(
        &self,
        id: StreamId,
        f: impl FnOnce(&dyn Stream) -> R,
    ) -> Result<R> {
        self.lookup(id).await?.with_handle(f)
    }

    /// Run `f` against a live stream's handle and its control attachment
    ///
    /// Both are read under one registry guard, so no destroy, attach or
    /// detach lands between them.
    pub async fn inspect<R>(
        &self,
        id: StreamId,
        f: impl FnOnce(&dyn Stream, bool) -> R,
    ) -> Result<R> {
        let state = self.state.read().await;

        let proxy = state.streams.get(&id).ok_or(Error::NotFound(id))?;
        let attached = state.controls.contains(id);

        proxy.with_handle(|handle| f(handle, attached))
    }

    /// Snapshot of live identifiers, ascending
    pub async fn list(&self) -> std::vec::IntoIter<StreamId> {
        let state = self.state.read().await;

        state.streams.keys().copied().collect::<Vec<_>>().into_iter()
    }

    /// Check if a stream is live
    pub async fn contains(&self, id: StreamId) -> bool {
        self.state.read().await.streams.contains_key(&id)
    }

    /// Get total number of live streams
    pub async fn stream_count(&self) -> usize {
        self.state.read().await.streams.len()
    }

    /// Attach the stream's trick-play control
    ///
    /// Fails with `NotFound` if the stream is not live and with `Unsupported`
    /// if its handle has no control.
    pub async fn attach(&self, id: StreamId) -> Result<Arc<dyn StreamControl>> {
        let mut state = self.state.write().await;

        let proxy = state.streams.get(&id).ok_or(Error::NotFound(id))?;
        let control = proxy
            .with_handle(|handle| handle.control())?
            .ok_or(Error::Unsupported("stream has no control"))?;

        let result = state
            .controls
            .attach(id, control, self.config.attach_policy);

        match &result {
            Ok(_) => tracing::info!(stream_id = id, "Control attached"),
            Err(e) => tracing::warn!(stream_id = id, error = %e, "Control attach rejected"),
        }

        result
    }

    /// Detach the stream's control; the stream itself stays live
    pub async fn detach(&self, id: StreamId) -> Result<()> {
        let mut state = self.state.write().await;

        state.controls.detach(id)?;
        tracing::info!(stream_id = id, "Control detached");

        Ok(())
    }

    /// Attached control of a live stream
    ///
    /// Fails with `NotFound` if the stream is not live and with
    /// `IllegalState` if no control is attached.
    pub async fn control(&self, id: StreamId) -> Result<Arc<dyn StreamControl>> {
        let state = self.state.read().await;

        if !state.streams.contains_key(&id) {
            return Err(Error::NotFound(id));
        }

        state
            .controls
            .get(id)
            .ok_or_else(|| Error::IllegalState(format!("stream {} has no control attached", id)))
    }

    /// Check if a stream has an attached control
    pub async fn is_attached(&self, id: StreamId) -> bool {
        self.state.read().await.controls.contains(id)
    }

    /// Destroy every live stream
    ///
    /// Returns the number of streams destroyed.
    pub async fn clear(&self) -> usize {
        let mut state = self.state.write().await;

        let streams = std::mem::take(&mut state.streams);
        state.controls.clear();

        for proxy in streams.values() {
            proxy.release();
        }

        let count = streams.len();
        self.destroyed.fetch_add(count as u64, Ordering::Relaxed);

        if count > 0 {
            tracing::info!(streams = count, "All streams destroyed");
        }

        count
    }

    /// Lifecycle counters
    pub async fn stats(&self) -> RegistryStats {
        let state = self.state.read().await;

        RegistryStats {
            active_streams: state.streams.len(),
            attached_controls: state.controls.len(),
            streams_created: self.created.load(Ordering::Relaxed),
            streams_destroyed: self.destroyed.load(Ordering::Relaxed),
        }
    }
}
