//! Command surface
//!
//! [`Streamer`] exposes create/destroy, load, attach/detach, speed, position,
//! window and the query verbs against the stream registry.

pub mod config;
pub mod status;
pub mod streamer;

pub use config::StreamerConfig;
pub use status::StreamStatus;
pub use streamer::Streamer;
