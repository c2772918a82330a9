//! Stream registry
//!
//! The registry owns every live stream proxy and the controls attached to
//! them, and hands out stream identifiers.
//!
//! # Architecture
//!
//! ```text
//!                        Arc<StreamRegistry>
//!                 ┌──────────────────────────────┐
//!                 │ RwLock<RegistryState {       │
//!                 │   streams:  BTreeMap<Id,     │
//!                 │     Arc<StreamProxy>>,       │
//!                 │   controls: ControlRegistry, │
//!                 │ }>                           │
//!                 └──────────────┬───────────────┘
//!                                │
//!         ┌──────────────────────┼──────────────────────┐
//!         ▼                      ▼                      ▼
//!   StreamProxy { 0 }      StreamProxy { 1 }      StreamProxy { 2 }
//!   handle ─► sink ─┐      handle ─► sink ─┐      handle ─► sink ─┐
//!                   └──────────────────────┴──────────────────────┴─► NotificationRouter
//! ```
//!
//! # Identifier reuse
//!
//! Destroy clears the handle's observer and detaches the sink while still
//! holding the registry lock, so a reused identifier never receives events
//! from its previous occupant.

pub mod config;
pub mod controls;
pub mod store;

pub use config::{AttachPolicy, RegistryConfig, MAX_STREAM_IDS};
pub use controls::ControlRegistry;
pub use store::StreamRegistry;
