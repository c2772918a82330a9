//! Error types
//!
//! Every command returns its error synchronously to the caller. The event
//! relay path never produces errors; undeliverable events are dropped.

use thiserror::Error;

use crate::player::{PlayerError, StreamId};

/// Error type for streamer operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or missing input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown or already destroyed stream
    #[error("Stream not found: {0}")]
    NotFound(StreamId),

    /// The stream handle lacks the requested capability
    #[error("Unsupported: {0}")]
    Unsupported(&'static str),

    /// Every stream identifier is in use
    #[error("No free stream identifier (limit {0})")]
    ResourceExhausted(usize),

    /// A control is already attached and replacing it is not allowed
    #[error("Stream {0} already has a control attached")]
    Conflict(StreamId),

    /// The stream is live but not in a state that allows the operation
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// Failure reported by the player implementation
    #[error("Player error: {0}")]
    Player(#[from] PlayerError),
}

/// Result type for streamer operations
pub type Result<T> = std::result::Result<T, Error>;
