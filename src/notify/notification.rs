//! Identity-tagged notifications
//!
//! A notification pairs a stream identifier with one event. The JSON form is
//! flat: `{"id":0,"stream":"Playing"}`, `{"id":0,"drm":"PlayReady"}`,
//! `{"id":0,"time":1234}`.

use serde::Serialize;

use crate::player::{DrmType, StreamId, StreamState};

/// Kind of event carried by a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Drm,
    StateChange,
    TimeUpdate,
}

/// Payload of a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NotificationEvent {
    /// DRM status changed
    #[serde(rename = "drm", serialize_with = "tag")]
    Drm(DrmType),
    /// Playback state changed
    #[serde(rename = "stream", serialize_with = "tag")]
    StateChange(StreamState),
    /// Playback position advanced
    #[serde(rename = "time")]
    TimeUpdate(u64),
}

impl NotificationEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            NotificationEvent::Drm(_) => EventKind::Drm,
            NotificationEvent::StateChange(_) => EventKind::StateChange,
            NotificationEvent::TimeUpdate(_) => EventKind::TimeUpdate,
        }
    }
}

fn tag<T: std::fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Outbound notification for one stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Stream the event belongs to
    pub id: StreamId,
    /// What happened
    #[serde(flatten)]
    pub event: NotificationEvent,
}

impl Notification {
    pub fn new(id: StreamId, event: NotificationEvent) -> Self {
        Self { id, event }
    }

    pub fn drm(id: StreamId, drm: DrmType) -> Self {
        Self::new(id, NotificationEvent::Drm(drm))
    }

    pub fn state_change(id: StreamId, state: StreamState) -> Self {
        Self::new(id, NotificationEvent::StateChange(state))
    }

    pub fn time_update(id: StreamId, position: u64) -> Self {
        Self::new(id, NotificationEvent::TimeUpdate(position))
    }

    /// Kind of the carried event
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }

    /// Render the notification as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
