//! Stream proxy
//!
//! Owns one stream handle for the lifetime of a registry entry. Construction
//! installs the proxy's [`StreamSink`] into the handle; [`release`] clears the
//! observer, detaches the sink, and only then drops the handle reference.
//!
//! The handle never leaves the proxy. Commands borrow it through
//! [`with_handle`] for a single call, and [`release`] waits for those calls
//! to return before taking it.
//!
//! [`release`]: StreamProxy::release
//! [`with_handle`]: StreamProxy::with_handle

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use super::sink::StreamSink;
use crate::error::{Error, Result};
use crate::notify::NotificationRouter;
use crate::player::{Stream, StreamId, StreamObserver};

/// Exclusive owner of one stream handle
pub struct StreamProxy {
    id: StreamId,
    handle: RwLock<Option<Arc<dyn Stream>>>,
    sink: Arc<StreamSink>,
    created_at: Instant,
}

impl StreamProxy {
    /// Take ownership of `handle` and start relaying its events as stream `id`
    pub(crate) fn new(
        id: StreamId,
        handle: Arc<dyn Stream>,
        router: Arc<NotificationRouter>,
    ) -> Self {
        let sink = StreamSink::new(id, router);
        handle.set_observer(Some(Arc::clone(&sink) as Arc<dyn StreamObserver>));

        Self {
            id,
            handle: RwLock::new(Some(handle)),
            sink,
            created_at: Instant::now(),
        }
    }

    /// Stream identifier
    pub fn id(&self) -> StreamId {
        self.id
    }

    /// Run `f` against the owned handle
    ///
    /// The handle stays borrowed for the duration of `f`; a concurrent
    /// [`release`](Self::release) blocks until it returns. Fails with
    /// `NotFound` once the proxy has been released.
    pub fn with_handle<R>(&self, f: impl FnOnce(&dyn Stream) -> R) -> Result<R> {
        let guard = self.handle.read();
        let handle = guard.as_deref().ok_or(Error::NotFound(self.id))?;

        Ok(f(handle))
    }

    /// Whether the handle has been given back
    pub fn is_released(&self) -> bool {
        self.handle.read().is_none()
    }

    /// Time since the stream was created
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Give the handle back
    ///
    /// Runs at most once; later calls return `false`.
    pub(crate) fn release(&self) -> bool {
        let Some(handle) = self.handle.write().take() else {
            return false;
        };

        handle.set_observer(None);
        self.sink.detach();
        drop(handle);

        tracing::debug!(stream_id = self.id, "Stream handle released");
        true
    }
}

impl Drop for StreamProxy {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for StreamProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamProxy")
            .field("id", &self.id)
            .field("released", &self.is_released())
            .finish()
    }
}
