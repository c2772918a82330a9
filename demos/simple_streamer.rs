//! Simple streamer example with a simulated player
//!
//! Run with: cargo run --example simple_streamer
//!
//! Creates two streams, loads media into them and prints every notification
//! the simulated player produces until both streams are destroyed.
//!
//! Set `RUST_LOG=streamer_rs=debug` to see the streamer's own tracing.

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use streamer_rs::player::{
    DrmType, Geometry, LoadRequest, Player, PlayerError, Stream, StreamObserver, StreamState,
    StreamType,
};
use streamer_rs::{Streamer, StreamerConfig};

/// Stream that "plays" by ticking its position on a background thread
struct SimulatedStream {
    stream_type: StreamType,
    state: Mutex<StreamState>,
    speed: AtomicI32,
    position: AtomicU64,
    geometry: Mutex<Geometry>,
    observer: Arc<Mutex<Option<Arc<dyn StreamObserver>>>>,
    running: Arc<AtomicBool>,
}

impl SimulatedStream {
    fn notify(&self, f: impl FnOnce(&dyn StreamObserver)) {
        let observer = self.observer.lock().clone();
        if let Some(observer) = observer {
            f(observer.as_ref());
        }
    }
}

impl Stream for SimulatedStream {
    fn stream_type(&self) -> StreamType {
        self.stream_type
    }

    fn drm(&self) -> DrmType {
        DrmType::None
    }

    fn state(&self) -> StreamState {
        *self.state.lock()
    }

    fn metadata(&self) -> String {
        format!("simulated {}", self.stream_type)
    }

    fn load(&self, request: &LoadRequest) -> Result<(), PlayerError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(PlayerError::Unavailable("already loaded".into()));
        }

        println!("Loading {}", request.url);
        *self.state.lock() = StreamState::Loading;
        self.notify(|o| o.on_state_change(StreamState::Loading));

        let observer = Arc::clone(&self.observer);
        let running = Arc::clone(&self.running);
        let start = request.begin.unwrap_or(0);

        thread::spawn(move || {
            let emit = |f: &dyn Fn(&dyn StreamObserver)| {
                let current = observer.lock().clone();
                if let Some(current) = current {
                    f(current.as_ref());
                }
            };

            thread::sleep(Duration::from_millis(100));
            emit(&|o| o.on_drm(DrmType::ClearKey.code()));
            emit(&|o| o.on_state_change(StreamState::Playing));

            let mut position = start;
            while running.load(Ordering::SeqCst) {
                thread::sleep(Duration::from_millis(250));
                position += 250;
                emit(&|o| o.on_time_update(position));
            }
        });

        Ok(())
    }

    fn speed(&self) -> i32 {
        self.speed.load(Ordering::Relaxed)
    }

    fn set_speed(&self, speed: i32) -> Result<(), PlayerError> {
        self.speed.store(speed, Ordering::Relaxed);
        Ok(())
    }

    fn position(&self) -> u64 {
        self.position.load(Ordering::Relaxed)
    }

    fn set_position(&self, position: u64) -> Result<(), PlayerError> {
        self.position.store(position, Ordering::Relaxed);
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
        if observer.is_none() {
            self.running.store(false, Ordering::SeqCst);
        }
        *self.observer.lock() = observer;
    }
}

struct SimulatedPlayer;

impl Player for SimulatedPlayer {
    fn create_stream(
        &self,
        stream_type: StreamType,
        geometry: Option<Geometry>,
    ) -> Option<Arc<dyn Stream>> {
        Some(Arc::new(SimulatedStream {
            stream_type,
            state: Mutex::new(StreamState::Idle),
            speed: AtomicI32::new(1),
            position: AtomicU64::new(0),
            geometry: Mutex::new(geometry.unwrap_or_default()),
            observer: Arc::new(Mutex::new(None)),
            running: Arc::new(AtomicBool::new(false)),
        }))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("streamer_rs=info")),
        )
        .init();

    let config = StreamerConfig::default().default_geometry(Geometry::new(0, 0, 0, 1280, 720));
    let streamer = Streamer::new(config, SimulatedPlayer);

    let mut notifications = streamer.subscribe();
    let printer = tokio::spawn(async move {
        while let Ok(notification) = notifications.recv().await {
            println!("notify: {}", notification.to_json().unwrap_or_default());
        }
    });

    let first = streamer.create(StreamType::Streaming).await?;
    let second = streamer.create(StreamType::Ip).await?;
    println!("Streams: {:?}", streamer.streams().await.collect::<Vec<_>>());

    streamer
        .load(first, LoadRequest::new("http://localhost/movie.m3u8"))
        .await?;
    streamer
        .load(second, LoadRequest::new("udp://239.1.1.1:5000").range(1000, 60_000))
        .await?;
    streamer.set_speed(first, 2).await?;

    tokio::time::sleep(Duration::from_secs(1)).await;

    for id in [first, second] {
        println!("Status: {:?}", streamer.status(id).await?);
    }

    streamer.destroy(first).await?;
    tokio::time::sleep(Duration::from_millis(500)).await;

    println!("Stats: {:?}", streamer.stats().await);
    streamer.shutdown().await;

    drop(streamer);
    printer.await?;

    Ok(())
}
