//! Shared fakes for session tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use aria_core::TrackId;
use aria_playback::{
    AudioEngine, AudioHandle, EngineError, EngineResult, EngineStatus, HistoryRecorder,
    PlaybackEvent, PlaybackSession, PlaybackSnapshot, RecordError, ResolveError, StatusSender,
    StreamResolver,
};

/// In-memory audio engine that hands out [`FakeHandle`]s and retains every
/// status sender so tests can inject engine reports.
#[derive(Default)]
pub struct FakeEngine {
    live: Arc<AtomicUsize>,
    configure_calls: AtomicUsize,
    loads: Mutex<Vec<String>>,
    failing_urls: Mutex<HashSet<String>>,
    delay_gate: Mutex<Option<(String, Arc<Notify>)>>,
    command_gate: Arc<Mutex<Option<Arc<Notify>>>>,
    status_senders: Mutex<Vec<StatusSender>>,
    commands: Arc<Mutex<Vec<String>>>,
    fail_commands: AtomicUsize,
}

impl FakeEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make loads of this exact URL fail
    pub fn fail_url(&self, url: &str) {
        self.failing_urls.lock().unwrap().insert(url.to_string());
    }

    /// Park the next load of this exact URL until the gate is notified
    pub fn delay_url(&self, url: &str, gate: Arc<Notify>) {
        *self.delay_gate.lock().unwrap() = Some((url.to_string(), gate));
    }

    /// Park the next handle command until the gate is notified
    pub fn stall_next_command(&self, gate: Arc<Notify>) {
        *self.command_gate.lock().unwrap() = Some(gate);
    }

    /// Make every subsequent handle command return an error
    pub fn fail_commands(&self) {
        self.fail_commands.store(1, Ordering::SeqCst);
    }

    /// Number of handles currently live (loaded and not released)
    pub fn live_handles(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn configure_calls(&self) -> usize {
        self.configure_calls.load(Ordering::SeqCst)
    }

    /// Every URL that reached `load`, in order
    pub fn loaded_urls(&self) -> Vec<String> {
        self.loads.lock().unwrap().clone()
    }

    /// Every transport command issued to any handle, in order
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    /// Status sender of the most recent successful load
    pub fn latest_status_sender(&self) -> StatusSender {
        self.status_senders
            .lock()
            .unwrap()
            .last()
            .expect("no load has succeeded yet")
            .clone()
    }

    /// Status sender of the nth successful load (0-based)
    pub fn status_sender(&self, n: usize) -> StatusSender {
        self.status_senders.lock().unwrap()[n].clone()
    }

    /// A loaded, playing report at the given position
    pub fn playing_status(position: Duration) -> EngineStatus {
        EngineStatus {
            is_loaded: true,
            position,
            duration: Some(Duration::from_secs(180)),
            is_playing: true,
            did_just_finish: false,
        }
    }

    /// The report the engine emits when the stream plays to its end
    pub fn finished_status() -> EngineStatus {
        EngineStatus {
            is_loaded: true,
            position: Duration::from_secs(180),
            duration: Some(Duration::from_secs(180)),
            is_playing: false,
            did_just_finish: true,
        }
    }
}

#[async_trait]
impl AudioEngine for FakeEngine {
    async fn configure(&self) -> EngineResult<()> {
        self.configure_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load(
        &self,
        url: &str,
        autoplay: bool,
        status: StatusSender,
    ) -> EngineResult<(Box<dyn AudioHandle>, EngineStatus)> {
        let gate = {
            let mut slot = self.delay_gate.lock().unwrap();
            match slot.as_ref() {
                Some((gated_url, _)) if gated_url == url => slot.take().map(|(_, gate)| gate),
                _ => None,
            }
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.loads.lock().unwrap().push(url.to_string());
        if self.failing_urls.lock().unwrap().contains(url) {
            return Err(EngineError::Load("decoder rejected stream".to_string()));
        }
        self.live.fetch_add(1, Ordering::SeqCst);
        self.status_senders.lock().unwrap().push(status);
        let handle = FakeHandle {
            live: Arc::clone(&self.live),
            commands: Arc::clone(&self.commands),
            gate: Arc::clone(&self.command_gate),
            fail: self.fail_commands.load(Ordering::SeqCst) == 1,
        };
        let initial = EngineStatus {
            is_loaded: true,
            position: Duration::ZERO,
            duration: Some(Duration::from_secs(180)),
            is_playing: autoplay,
            did_just_finish: false,
        };
        Ok((Box::new(handle), initial))
    }
}

pub struct FakeHandle {
    live: Arc<AtomicUsize>,
    commands: Arc<Mutex<Vec<String>>>,
    gate: Arc<Mutex<Option<Arc<Notify>>>>,
    fail: bool,
}

impl FakeHandle {
    async fn command(&self, name: String) -> EngineResult<()> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.commands.lock().unwrap().push(name);
        if self.fail {
            Err(EngineError::Command("command rejected".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AudioHandle for FakeHandle {
    async fn pause(&self) -> EngineResult<()> {
        self.command("pause".to_string()).await
    }

    async fn resume(&self) -> EngineResult<()> {
        self.command("resume".to_string()).await
    }

    async fn seek(&self, position: Duration) -> EngineResult<()> {
        self.command(format!("seek {}ms", position.as_millis())).await
    }

    async fn release(&self) -> EngineResult<()> {
        self.live.fetch_sub(1, Ordering::SeqCst);
        self.command("release".to_string()).await
    }
}

/// Resolver producing deterministic URLs, with per-track failure switches
#[derive(Default)]
pub struct FakeResolver {
    unavailable: Mutex<HashSet<String>>,
    calls: Mutex<Vec<String>>,
}

impl FakeResolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn mark_unavailable(&self, id: &str) {
        self.unavailable.lock().unwrap().insert(id.to_string());
    }

    /// Track IDs resolved so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// The URL this resolver would produce for a track
    pub fn url_for(id: &str) -> String {
        format!("https://cdn.test/{id}.m4a")
    }
}

#[async_trait]
impl StreamResolver for FakeResolver {
    async fn resolve_stream_url(&self, track: &TrackId) -> Result<String, ResolveError> {
        self.calls.lock().unwrap().push(track.to_string());
        if self.unavailable.lock().unwrap().contains(track.as_str()) {
            return Err(ResolveError::NotAvailable);
        }
        Ok(Self::url_for(track.as_str()))
    }
}

/// Records every listen it receives
#[derive(Default)]
pub struct FakeRecorder {
    listens: Mutex<Vec<TrackId>>,
}

impl FakeRecorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn listens(&self) -> Vec<TrackId> {
        self.listens.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryRecorder for FakeRecorder {
    async fn record_listen(&self, track: &TrackId) -> Result<(), RecordError> {
        self.listens.lock().unwrap().push(track.clone());
        Ok(())
    }
}

/// Poll the session's watch channel until `condition` holds, with a hard
/// timeout so a wedged session fails the test instead of hanging it.
pub async fn wait_for_state<F>(session: &PlaybackSession, condition: F) -> PlaybackSnapshot
where
    F: Fn(&PlaybackSnapshot) -> bool,
{
    let mut rx = session.watch_state();
    tokio::time::timeout(Duration::from_secs(2), async move {
        loop {
            let snapshot = rx.borrow().clone();
            if condition(&snapshot) {
                return snapshot;
            }
            rx.changed().await.expect("session dropped");
        }
    })
    .await
    .expect("session state never reached the expected condition")
}

/// Receive the next playback event, failing the test after two seconds
pub async fn next_event(rx: &mut tokio::sync::broadcast::Receiver<PlaybackEvent>) -> PlaybackEvent {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no playback event arrived")
        .expect("event channel closed")
}

/// Poll `condition` until it holds, failing the test after two seconds
pub async fn eventually<F>(condition: F)
where
    F: Fn() -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("condition never became true");
}
