//! Stream event sink
//!
//! The observer installed into a stream handle. It converts the handle's
//! push-style callbacks into notifications tagged with the identifier the
//! sink was created for.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::notify::{NotificationEvent, NotificationRouter};
use crate::player::{DrmType, StreamId, StreamObserver, StreamState};

/// Per-stream observer relaying events to the notification router
///
/// The identifier is fixed at construction; a sink never speaks for any
/// other stream, even after its identifier is reused. Once [`detach`] returns,
/// no relay is running and none will start.
///
/// [`detach`]: StreamSink::detach
pub struct StreamSink {
    id: StreamId,
    route: RwLock<Option<Arc<NotificationRouter>>>,
}

impl StreamSink {
    /// Create a sink for stream `id`
    pub fn new(id: StreamId, router: Arc<NotificationRouter>) -> Arc<Self> {
        Arc::new(Self {
            id,
            route: RwLock::new(Some(router)),
        })
    }

    /// Identifier this sink tags events with
    pub fn id(&self) -> StreamId {
        self.id
    }

    /// Whether events are still being relayed
    pub fn is_attached(&self) -> bool {
        self.route.read().is_some()
    }

    /// Stop relaying
    ///
    /// Waits for a relay in progress on another thread to finish. Returns
    /// `false` if the sink was already detached.
    pub fn detach(&self) -> bool {
        self.route.write().take().is_some()
    }

    fn relay(&self, event: NotificationEvent) {
        let route = self.route.read();

        match route.as_ref() {
            Some(router) => {
                router.publish(self.id, event);
            }
            None => {
                tracing::debug!(stream_id = self.id, ?event, "Relay after detach dropped");
            }
        }
    }
}

impl StreamObserver for StreamSink {
    fn on_drm(&self, code: u32) {
        self.relay(NotificationEvent::Drm(DrmType::from_code(code)));
    }

    fn on_state_change(&self, state: StreamState) {
        tracing::debug!(stream_id = self.id, state = %state, "Stream moved state");
        self.relay(NotificationEvent::StateChange(state));
    }

    fn on_time_update(&self, position: u64) {
        self.relay(NotificationEvent::TimeUpdate(position));
    }
}
