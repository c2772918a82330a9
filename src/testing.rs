//! In-memory player used by unit tests

use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

use crate::player::{
    DrmType, Geometry, LoadRequest, Player, PlayerError, Stream, StreamControl, StreamObserver,
    StreamState, StreamType,
};

pub(crate) struct MockControl {
    pub speeds: Vec<i32>,
    pub range: (u64, u64),
}

impl StreamControl for MockControl {
    fn speeds(&self) -> Vec<i32> {
        self.speeds.clone()
    }

    fn time_range(&self) -> (u64, u64) {
        self.range
    }
}

#[derive(Default)]
struct GateState {
    closed: bool,
    entered: bool,
}

/// Blocks stream calls while closed, so tests can hold a command in flight
#[derive(Default)]
pub(crate) struct Gate {
    state: Mutex<GateState>,
    changed: Condvar,
}

impl Gate {
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.entered = false;
    }

    pub fn open(&self) {
        self.state.lock().closed = false;
        self.changed.notify_all();
    }

    /// Block until some call is waiting at (or has passed) the gate
    pub fn wait_entered(&self) {
        let mut state = self.state.lock();
        while !state.entered {
            self.changed.wait(&mut state);
        }
    }

    fn pass(&self) {
        let mut state = self.state.lock();
        state.entered = true;
        self.changed.notify_all();
        while state.closed {
            self.changed.wait(&mut state);
        }
    }
}

pub(crate) struct MockStream {
    stream_type: StreamType,
    state: Mutex<StreamState>,
    drm: Mutex<DrmType>,
    speed: Mutex<i32>,
    position: Mutex<u64>,
    geometry: Mutex<Geometry>,
    observer: Mutex<Option<Arc<dyn StreamObserver>>>,
    last_observer: Mutex<Option<Arc<dyn StreamObserver>>>,
    loaded: Mutex<Option<LoadRequest>>,
    control: Option<Arc<MockControl>>,
    accepts_range: bool,
    gate: Gate,
}

impl MockStream {
    pub fn new(stream_type: StreamType) -> Arc<Self> {
        Arc::new(Self::build(stream_type, None, true))
    }

    pub fn with_control(stream_type: StreamType) -> Arc<Self> {
        let control = Arc::new(MockControl {
            speeds: vec![-4, -2, 0, 1, 2, 4],
            range: (0, 3_600_000),
        });
        Arc::new(Self::build(stream_type, Some(control), true))
    }

    pub fn without_range_support(stream_type: StreamType) -> Arc<Self> {
        Arc::new(Self::build(stream_type, None, false))
    }

    fn build(stream_type: StreamType, control: Option<Arc<MockControl>>, accepts_range: bool) -> Self {
        Self {
            stream_type,
            state: Mutex::new(StreamState::Idle),
            drm: Mutex::new(DrmType::None),
            speed: Mutex::new(0),
            position: Mutex::new(0),
            geometry: Mutex::new(Geometry::default()),
            observer: Mutex::new(None),
            last_observer: Mutex::new(None),
            loaded: Mutex::new(None),
            control,
            accepts_range,
            gate: Gate::default(),
        }
    }

    /// Gate in front of `state` and `set_speed`
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    pub fn has_observer(&self) -> bool {
        self.observer.lock().is_some()
    }

    /// Last observer ever installed, kept after it is cleared
    pub fn last_observer(&self) -> Option<Arc<dyn StreamObserver>> {
        self.last_observer.lock().clone()
    }

    pub fn loaded(&self) -> Option<LoadRequest> {
        self.loaded.lock().clone()
    }

    pub fn emit_state(&self, state: StreamState) {
        *self.state.lock() = state;
        if let Some(observer) = self.observer.lock().clone() {
            observer.on_state_change(state);
        }
    }

    pub fn emit_drm(&self, code: u32) {
        *self.drm.lock() = DrmType::from_code(code);
        if let Some(observer) = self.observer.lock().clone() {
            observer.on_drm(code);
        }
    }

    pub fn emit_time(&self, position: u64) {
        if let Some(observer) = self.observer.lock().clone() {
            observer.on_time_update(position);
        }
    }
}

impl Stream for MockStream {
    fn stream_type(&self) -> StreamType {
        self.stream_type
    }

    fn drm(&self) -> DrmType {
        *self.drm.lock()
    }

    fn state(&self) -> StreamState {
        self.gate.pass();
        *self.state.lock()
    }

    fn metadata(&self) -> String {
        format!("mock:{}", self.stream_type)
    }

    fn load(&self, request: &LoadRequest) -> Result<(), PlayerError> {
        if request.has_range() && !self.accepts_range {
            return Err(PlayerError::InvalidArgument("range not supported".into()));
        }
        *self.loaded.lock() = Some(request.clone());
        *self.state.lock() = StreamState::Loading;
        Ok(())
    }

    fn speed(&self) -> i32 {
        *self.speed.lock()
    }

    fn set_speed(&self, speed: i32) -> Result<(), PlayerError> {
        self.gate.pass();
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
            *self.last_observer.lock() = Some(Arc::clone(installed));
        }
        *self.observer.lock() = observer;
    }

    fn control(&self) -> Option<Arc<dyn StreamControl>> {
        self.control
            .as_ref()
            .map(|control| Arc::clone(control) as Arc<dyn StreamControl>)
    }
}

/// Player handing out [`MockStream`]s and remembering each one
pub(crate) struct MockPlayer {
    with_control: bool,
    unavailable: bool,
    created: Mutex<Vec<Arc<MockStream>>>,
}

impl MockPlayer {
    pub fn new() -> Self {
        Self {
            with_control: true,
            unavailable: false,
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn without_control() -> Self {
        Self {
            with_control: false,
            ..Self::new()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    pub fn last(&self) -> Option<Arc<MockStream>> {
        self.created.lock().last().cloned()
    }
}

impl Player for MockPlayer {
    fn create_stream(
        &self,
        stream_type: StreamType,
        geometry: Option<Geometry>,
    ) -> Option<Arc<dyn Stream>> {
        if self.unavailable {
            return None;
        }

        let stream = if self.with_control {
            MockStream::with_control(stream_type)
        } else {
            MockStream::new(stream_type)
        };
        if let Some(geometry) = geometry {
            *stream.geometry.lock() = geometry;
        }

        self.created.lock().push(Arc::clone(&stream));
        Some(stream as Arc<dyn Stream>)
    }
}
