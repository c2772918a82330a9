//! Per-stream session objects
//!
//! A [`StreamProxy`] owns one stream handle and one [`StreamSink`]. The sink
//! is the handle's observer and tags every event with the proxy's identifier.

pub mod proxy;
pub mod sink;

pub use proxy::StreamProxy;
pub use sink::StreamSink;
