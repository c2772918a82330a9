//! Statistics for the streamer and its notification router

/// Notification delivery counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterStats {
    /// Notifications delivered to at least one subscriber
    pub published: u64,
    /// Notifications discarded because nobody was subscribed
    pub dropped: u64,
    /// Current subscriber count
    pub subscribers: usize,
}

impl RouterStats {
    /// Total notifications offered to the router
    pub fn total(&self) -> u64 {
        self.published + self.dropped
    }
}

/// Registry lifecycle counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Currently live streams
    pub active_streams: usize,
    /// Currently attached controls
    pub attached_controls: usize,
    /// Streams created since start
    pub streams_created: u64,
    /// Streams destroyed since start
    pub streams_destroyed: u64,
}

/// Streamer-wide statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamerStats {
    pub active_streams: usize,
    pub attached_controls: usize,
    pub streams_created: u64,
    pub streams_destroyed: u64,
    pub notifications_published: u64,
    pub notifications_dropped: u64,
}

impl StreamerStats {
    /// Combine registry and router counters
    pub fn new(registry: RegistryStats, router: RouterStats) -> Self {
        Self {
            active_streams: registry.active_streams,
            attached_controls: registry.attached_controls,
            streams_created: registry.streams_created,
            streams_destroyed: registry.streams_destroyed,
            notifications_published: router.published,
            notifications_dropped: router.dropped,
        }
    }
}
