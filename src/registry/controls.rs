//! Control registry
//!
//! Maps stream identifiers to their attached trick-play control. It lives
//! inside the stream registry's locked state so that destroying a stream and
//! dropping its control happen in one step.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::config::AttachPolicy;
use crate::error::{Error, Result};
use crate::player::{StreamControl, StreamId};

/// Attached controls, at most one per stream
#[derive(Default)]
pub struct ControlRegistry {
    controls: BTreeMap<StreamId, Arc<dyn StreamControl>>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `control` for stream `id`
    ///
    /// With [`AttachPolicy::Reject`] an existing entry fails with `Conflict`;
    /// otherwise it is replaced.
    pub fn attach(
        &mut self,
        id: StreamId,
        control: Arc<dyn StreamControl>,
        policy: AttachPolicy,
    ) -> Result<Arc<dyn StreamControl>> {
        if policy == AttachPolicy::Reject && self.controls.contains_key(&id) {
            return Err(Error::Conflict(id));
        }

        if self.controls.insert(id, Arc::clone(&control)).is_some() {
            tracing::debug!(stream_id = id, "Replaced attached control");
        }

        Ok(control)
    }

    /// Remove the control of stream `id`
    pub fn detach(&mut self, id: StreamId) -> Result<()> {
        self.controls
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::NotFound(id))
    }

    /// Drop the control of a stream being destroyed, if any
    pub(crate) fn remove(&mut self, id: StreamId) -> bool {
        self.controls.remove(&id).is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.controls.clear();
    }

    /// Attached control of stream `id`
    pub fn get(&self, id: StreamId) -> Option<Arc<dyn StreamControl>> {
        self.controls.get(&id).cloned()
    }

    pub fn contains(&self, id: StreamId) -> bool {
        self.controls.contains_key(&id)
    }

    /// Identifiers with an attached control, ascending
    pub fn ids(&self) -> Vec<StreamId> {
        self.controls.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
