//! Notification routing
//!
//! Stream sinks hand identity-tagged events to the [`NotificationRouter`],
//! which broadcasts them to subscribers.
//!
//! ```text
//!   player thread A            player thread B
//!   Stream::on_state()         Stream::on_time()
//!         │                          │
//!         ▼                          ▼
//!   StreamSink { id: 0 }      StreamSink { id: 1 }
//!         │                          │
//!         └──────► router.publish() ◄┘
//!                        │
//!                broadcast::Sender
//!                ┌───────┴───────┐
//!                ▼               ▼
//!           [Subscriber]    [Subscriber]
//! ```

pub mod notification;
pub mod router;

pub use notification::{EventKind, Notification, NotificationEvent};
pub use router::NotificationRouter;
