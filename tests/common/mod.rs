//! Test player shared by the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use streamer_rs::player::{
    DrmType, Geometry, LoadRequest, Player, PlayerError, Stream, StreamControl, StreamObserver,
    StreamState, StreamType,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestControl;

impl StreamControl for TestControl {
    fn speeds(&self) -> Vec<i32> {
        vec![0, 1, 2]
    }

    fn time_range(&self) -> (u64, u64) {
        (0, 1000)
    }
}

pub struct TestStream {
    stream_type: StreamType,
    speed: Mutex<i32>,
    position: Mutex<u64>,
    geometry: Mutex<Geometry>,
    observer: Mutex<Option<Arc<dyn StreamObserver>>>,
    first_observer: Mutex<Option<Arc<dyn StreamObserver>>>,
}

impl TestStream {
    pub fn new(stream_type: StreamType) -> Arc<Self> {
        Arc::new(Self {
            stream_type,
            speed: Mutex::new(1),
            position: Mutex::new(0),
            geometry: Mutex::new(Geometry::default()),
            observer: Mutex::new(None),
            first_observer: Mutex::new(None),
        })
    }

    /// The observer installed at creation, still reachable after it is cleared
    ///
    /// Stands in for a callback the player already started before the
    /// observer was cleared.
    pub fn retained_observer(&self) -> Arc<dyn StreamObserver> {
        self.first_observer
            .lock()
            .clone()
            .expect("stream was never registered")
    }

    pub fn has_observer(&self) -> bool {
        self.observer.lock().is_some()
    }

    pub fn emit_state(&self, state: StreamState) {
        if let Some(observer) = self.observer.lock().clone() {
            observer.on_state_change(state);
        }
    }

    pub fn emit_time(&self, position: u64) {
        if let Some(observer) = self.observer.lock().clone() {
            observer.on_time_update(position);
        }
    }
}

impl Stream for TestStream {
    fn stream_type(&self) -> StreamType {
        self.stream_type
    }

    fn drm(&self) -> DrmType {
        DrmType::None
    }

    fn state(&self) -> StreamState {
        StreamState::Idle
    }

    fn load(&self, _request: &LoadRequest) -> Result<(), PlayerError> {
        Ok(())
    }

    fn speed(&self) -> i32 {
        *self.speed.lock()
    }

    fn set_speed(&self, speed: i32) -> Result<(), PlayerError> {
        *self.speed.lock() = speed;
        Ok(())
    }

    fn position(&self) -> u64 {
        *self.position.lock()
    }

    fn set_position(&self, position: u64) -> Result<(), PlayerError> {
        *self.position.lock() = position;
        Ok(())
    }

    fn geometry(&self) -> Geometry {
        *self.geometry.lock()
    }

    fn set_geometry(&self, geometry: Geometry) -> Result<(), PlayerError> {
        *self.geometry.lock() = geometry;
        Ok(())
    }

    fn set_observer(&self, observer: Option<Arc<dyn StreamObserver>>) {
        if let Some(ref installed) = observer {
            self.first_observer
                .lock()
                .get_or_insert_with(|| Arc::clone(installed));
        }
        *self.observer.lock() = observer;
    }

    fn control(&self) -> Option<Arc<dyn StreamControl>> {
        Some(Arc::new(TestControl))
    }
}

#[derive(Default)]
pub struct TestPlayer {
    created: Mutex<Vec<Arc<TestStream>>>,
}

impl TestPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently created stream
    pub fn last(&self) -> Arc<TestStream> {
        self.created
            .lock()
            .last()
            .cloned()
            .expect("no stream created")
    }
}

impl Player for TestPlayer {
    fn create_stream(
        &self,
        stream_type: StreamType,
        _geometry: Option<Geometry>,
    ) -> Option<Arc<dyn Stream>> {
        let stream = TestStream::new(stream_type);
        self.created.lock().push(Arc::clone(&stream));
        Some(stream as Arc<dyn Stream>)
    }
}
