//! Stream session multiplexer
//!
//! Runs several independently created playback streams behind one command
//! surface, addressed by small integer identifiers, and routes each stream's
//! DRM, state and time events to subscribers as identity-tagged
//! notifications.
//!
//! The player doing the actual decoding and rendering is supplied by the host
//! through the [`player::Player`] trait.
//!
//! # Example
//!
//! ```no_run
//! use streamer_rs::player::{Player, StreamType};
//! use streamer_rs::{Streamer, StreamerConfig};
//!
//! # async fn example<P: Player>(player: P) -> streamer_rs::Result<()> {
//! let streamer = Streamer::new(StreamerConfig::default(), player);
//! let mut notifications = streamer.subscribe();
//!
//! let id = streamer.create(StreamType::Streaming).await?;
//! streamer.set_speed(id, 2).await?;
//!
//! tokio::spawn(async move {
//!     while let Ok(notification) = notifications.recv().await {
//!         println!("{}", notification.to_json().unwrap_or_default());
//!     }
//! });
//!
//! streamer.destroy(id).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod notify;
pub mod player;
pub mod registry;
pub mod server;
pub mod session;
pub mod stats;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use notify::{Notification, NotificationEvent, NotificationRouter};
pub use player::StreamId;
pub use registry::{AttachPolicy, RegistryConfig, StreamRegistry};
pub use server::{StreamStatus, Streamer, StreamerConfig};
