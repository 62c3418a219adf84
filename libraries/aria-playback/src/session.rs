//! Playback session
//!
//! The single authority for "what is playing": owns the queue, the current
//! track, the transport flags, and the one live audio handle. All mutation
//! funnels through the session so observers always see a consistent state.
//!
//! Concurrency model: session state lives behind one async mutex. Every
//! load and every `stop` bumps a generation counter; async continuations
//! and engine status reports carry the generation they were started under
//! and drop themselves when a newer one has taken over. That is what keeps
//! a slow load from clobbering the track the user switched to in the
//! meantime.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch, Mutex, OnceCell};
use tracing::{debug, warn};

use aria_core::TrackId;

use crate::engine::{AudioEngine, AudioHandle, EngineError, EngineStatus};
use crate::error::PlaybackError;
use crate::events::PlaybackEvent;
use crate::history::HistoryRecorder;
use crate::queue::PlayQueue;
use crate::resolver::StreamResolver;
use crate::shuffle;
use crate::types::{PlaybackSnapshot, QueuedTrack, RepeatMode, SessionConfig};

/// Broadcast buffer for playback events
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Playback session manager.
///
/// Cheap to clone; all clones share the same underlying session. Commands
/// never return errors: every failure mode has a defined in-band recovery
/// (skip forward, keep the optimistic state, or log and drop).
#[derive(Clone)]
pub struct PlaybackSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    engine: Arc<dyn AudioEngine>,
    resolver: Arc<dyn StreamResolver>,
    history: Option<Arc<dyn HistoryRecorder>>,
    config: SessionConfig,
    core: Mutex<SessionCore>,
    /// Bumped on every load and on `stop`. Stale continuations compare
    /// their tag against this and drop themselves.
    generation: AtomicU64,
    engine_ready: OnceCell<()>,
    snapshot_tx: watch::Sender<PlaybackSnapshot>,
    events_tx: broadcast::Sender<PlaybackEvent>,
}

struct SessionCore {
    queue: PlayQueue,
    current: Option<QueuedTrack>,
    current_index: usize,
    is_playing: bool,
    is_loading: bool,
    position: Duration,
    duration: Duration,
    repeat: RepeatMode,
    shuffle: bool,
    /// Consecutive automatic failure-skips. Caps skip-forward recovery at
    /// one full pass over the queue so an entirely unplayable queue under
    /// repeat-all cannot advance forever.
    auto_skip_streak: usize,
    /// Shared so transport commands can run without the core lock held
    handle: Option<Arc<dyn AudioHandle>>,
}

impl SessionCore {
    fn new(config: &SessionConfig) -> Self {
        Self {
            queue: PlayQueue::new(),
            current: None,
            current_index: 0,
            is_playing: false,
            is_loading: false,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            repeat: config.repeat,
            shuffle: config.shuffle,
            auto_skip_streak: 0,
            handle: None,
        }
    }

    fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.current.clone(),
            queue: self.queue.tracks().to_vec(),
            current_index: self.current_index,
            is_playing: self.is_playing,
            is_loading: self.is_loading,
            position: self.position,
            duration: self.duration,
            repeat_mode: self.repeat,
            is_shuffle: self.shuffle,
        }
    }
}

impl PlaybackSession {
    /// Create a session over the given collaborators.
    ///
    /// `history` is optional; without it, finished tracks simply go
    /// unreported.
    pub fn new(
        engine: Arc<dyn AudioEngine>,
        resolver: Arc<dyn StreamResolver>,
        history: Option<Arc<dyn HistoryRecorder>>,
        config: SessionConfig,
    ) -> Self {
        let core = SessionCore::new(&config);
        let (snapshot_tx, _) = watch::channel(core.snapshot());
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(SessionInner {
                engine,
                resolver,
                history,
                config,
                core: Mutex::new(core),
                generation: AtomicU64::new(0),
                engine_ready: OnceCell::new(),
                snapshot_tx,
                events_tx,
            }),
        }
    }

    /// Start playing `track`, optionally replacing the queue.
    ///
    /// A supplied queue is adopted wholesale and the track's position in
    /// it becomes the current index, clamped to the start when the queue
    /// does not contain the track. Without a queue, the queue becomes just
    /// this track. The pending state (loading, position zero) is visible
    /// to observers before any network or engine work begins.
    pub async fn play_track(&self, track: QueuedTrack, queue: Option<Vec<QueuedTrack>>) {
        self.inner.core.lock().await.auto_skip_streak = 0;
        let queue = match queue {
            Some(tracks) => PlayQueue::from_tracks(tracks),
            None => PlayQueue::singleton(track.clone()),
        };
        let index = queue.position_of(&track.id).unwrap_or(0);
        self.inner.clone().begin_load(Some(queue), index).await;
    }

    /// Pause playback, keeping the current track loaded.
    ///
    /// The paused state is applied even if the engine rejects the command;
    /// the next status report reconciles any mismatch.
    pub async fn pause(&self) {
        let handle = {
            let mut core = self.inner.core.lock().await;
            core.is_playing = false;
            self.inner.publish(&core);
            core.handle.clone()
        };
        if let Some(handle) = handle {
            if let Err(err) = handle.pause().await {
                let err = PlaybackError::Transport(err);
                warn!(error = %err, "pause rejected by engine");
            }
        }
    }

    /// Resume playback; mirror of [`pause`](Self::pause), including the
    /// unconditional optimistic flag.
    pub async fn resume(&self) {
        let handle = {
            let mut core = self.inner.core.lock().await;
            core.is_playing = true;
            self.inner.publish(&core);
            core.handle.clone()
        };
        if let Some(handle) = handle {
            if let Err(err) = handle.resume().await {
                let err = PlaybackError::Transport(err);
                warn!(error = %err, "resume rejected by engine");
            }
        }
    }

    /// Advance according to the current repeat and shuffle policy.
    ///
    /// Repeat-one replays the current track, shuffle jumps to a random
    /// other entry, otherwise the next index (wrapping only under
    /// repeat-all). Past the end with repeat off, the session parks itself
    /// paused at the last track.
    pub async fn next(&self) {
        self.inner.core.lock().await.auto_skip_streak = 0;
        self.inner.clone().advance().await;
    }

    /// Go back one track, or restart the current one when playback has
    /// progressed past the restart threshold. At the first track, going
    /// back restarts it.
    pub async fn previous(&self) {
        let target = {
            let mut core = self.inner.core.lock().await;
            if core.queue.is_empty() {
                return;
            }
            core.auto_skip_streak = 0;
            if core.position > self.inner.config.restart_threshold {
                None
            } else {
                Some(core.current_index.saturating_sub(1))
            }
        };
        match target {
            None => self.seek_to(Duration::ZERO).await,
            Some(index) => self.inner.clone().begin_load(None, index).await,
        }
    }

    /// Jump to an absolute position in the current track.
    ///
    /// The position is applied optimistically; an engine rejection is
    /// logged and the next status report reconciles the drift.
    pub async fn seek_to(&self, position: Duration) {
        let handle = {
            let mut core = self.inner.core.lock().await;
            core.position = position;
            self.inner.publish(&core);
            core.handle.clone()
        };
        if let Some(handle) = handle {
            if let Err(err) = handle.seek(position).await {
                let err = PlaybackError::Transport(err);
                warn!(error = %err, "seek rejected by engine");
            }
        }
    }

    /// Append a track to the end of the queue without touching playback
    pub async fn add_to_queue(&self, track: QueuedTrack) {
        let mut core = self.inner.core.lock().await;
        core.queue.push(track);
        self.inner.publish(&core);
    }

    /// Set the repeat mode, effective from the next track transition
    pub async fn set_repeat_mode(&self, mode: RepeatMode) {
        let mut core = self.inner.core.lock().await;
        core.repeat = mode;
        self.inner.publish(&core);
    }

    /// Flip shuffle on or off, effective from the next track transition
    pub async fn toggle_shuffle(&self) {
        let mut core = self.inner.core.lock().await;
        core.shuffle = !core.shuffle;
        self.inner.publish(&core);
    }

    /// Tear everything down: release the audio handle, clear the queue,
    /// and reset all state to the configured defaults. Unlike running off
    /// the end of the queue, nothing survives a stop.
    pub async fn stop(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        let handle = {
            let mut core = self.inner.core.lock().await;
            let handle = core.handle.take();
            *core = SessionCore::new(&self.inner.config);
            self.inner.publish(&core);
            handle
        };
        if let Some(handle) = handle {
            if let Err(err) = handle.release().await {
                debug!(error = %err, "releasing audio handle on stop failed");
            }
        }
    }

    /// Current state as an owned snapshot
    pub async fn snapshot(&self) -> PlaybackSnapshot {
        self.inner.core.lock().await.snapshot()
    }

    /// Watch channel receiving a fresh snapshot on every state change
    pub fn watch_state(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.inner.snapshot_tx.subscribe()
    }

    /// Subscribe to the lifecycle event stream
    pub fn subscribe_events(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.inner.events_tx.subscribe()
    }
}

impl SessionInner {
    fn publish(&self, core: &SessionCore) {
        self.snapshot_tx.send_replace(core.snapshot());
    }

    fn emit(&self, event: PlaybackEvent) {
        let _ = self.events_tx.send(event);
    }

    async fn ensure_engine_configured(&self) -> Result<(), EngineError> {
        self.engine_ready
            .get_or_try_init(|| async { self.engine.configure().await })
            .await
            .map(|_| ())
    }

    /// Load and start the queue entry at `index`, optionally installing a
    /// new queue first. Supersedes any in-flight load.
    async fn begin_load(self: Arc<Self>, new_queue: Option<PlayQueue>, index: usize) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (track, previous) = {
            let mut core = self.core.lock().await;
            if self.generation.load(Ordering::SeqCst) != generation {
                // A newer load or a stop took the generation between the
                // bump above and this lock; its state wins.
                return;
            }
            if let Some(queue) = new_queue {
                core.queue = queue;
            }
            let Some(track) = core.queue.get(index).cloned() else {
                return;
            };
            core.current = Some(track.clone());
            core.current_index = index;
            core.is_loading = true;
            core.is_playing = false;
            core.position = Duration::ZERO;
            core.duration = Duration::ZERO;
            let previous = core.handle.take();
            self.publish(&core);
            (track, previous)
        };

        // The old handle must be fully torn down before a replacement is
        // loaded; the engine never holds two live streams.
        if let Some(handle) = previous {
            if let Err(err) = handle.release().await {
                debug!(error = %err, "releasing previous audio handle failed");
            }
        }

        let url = match self.resolver.resolve_stream_url(&track.id).await {
            Ok(url) => url,
            Err(source) => {
                let error = PlaybackError::Resolution {
                    track: track.id.clone(),
                    source,
                };
                warn!(track = %track.id, error = %error, "skipping unplayable track");
                self.fail_and_advance(generation, track.id.clone(), error).await;
                return;
            }
        };

        if let Err(source) = self.ensure_engine_configured().await {
            let error = PlaybackError::EngineLoad {
                track: track.id.clone(),
                source,
            };
            warn!(track = %track.id, error = %error, "audio engine unavailable");
            self.fail_and_advance(generation, track.id.clone(), error).await;
            return;
        }

        debug!(track = %track.id, "loading stream");
        let (status_tx, status_rx) = mpsc::unbounded_channel();
        match self.engine.load(&url, true, status_tx).await {
            Ok((handle, status)) => {
                let superseded = {
                    let mut core = self.core.lock().await;
                    if self.generation.load(Ordering::SeqCst) == generation {
                        core.handle = Some(Arc::from(handle));
                        core.is_loading = false;
                        core.is_playing = status.is_loaded && status.is_playing;
                        core.duration = status.duration.unwrap_or(Duration::ZERO);
                        core.auto_skip_streak = 0;
                        self.publish(&core);
                        None
                    } else {
                        Some(handle)
                    }
                };
                match superseded {
                    None => {
                        self.emit(PlaybackEvent::TrackStarted {
                            track: track.id.clone(),
                        });
                        tokio::spawn(self.clone().pump_status(generation, status_rx));
                    }
                    Some(handle) => {
                        // A newer load or a stop won the race; this stream
                        // was never current.
                        if let Err(err) = handle.release().await {
                            debug!(error = %err, "releasing superseded audio handle failed");
                        }
                    }
                }
            }
            Err(source) => {
                let error = PlaybackError::EngineLoad {
                    track: track.id.clone(),
                    source,
                };
                warn!(track = %track.id, error = %error, "engine rejected stream, skipping");
                self.fail_and_advance(generation, track.id.clone(), error).await;
            }
        }
    }

    /// Recover from a failed load: clear the transient flags, announce the
    /// failure, and skip forward unless a full pass over the queue has
    /// already failed.
    async fn fail_and_advance(self: Arc<Self>, generation: u64, track: TrackId, error: PlaybackError) {
        let keep_skipping = {
            let mut core = self.core.lock().await;
            if self.generation.load(Ordering::SeqCst) != generation {
                // A newer load owns the state now.
                return;
            }
            core.is_loading = false;
            core.is_playing = false;
            core.auto_skip_streak += 1;
            self.publish(&core);
            core.auto_skip_streak < core.queue.len()
        };
        self.emit(PlaybackEvent::PlaybackFailed {
            track,
            error: error.to_string(),
        });
        if keep_skipping {
            self.advance().await;
        } else {
            warn!("every queue entry failed to play; giving up until the next command");
        }
    }

    /// Move to whatever the repeat/shuffle policy says comes next, or park
    /// paused at the end of a non-repeating queue.
    ///
    /// Boxed because failure recovery re-enters it through `begin_load`.
    fn advance(self: Arc<Self>) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(async move {
            let target = {
                let mut core = self.core.lock().await;
                if core.queue.is_empty() {
                    return;
                }
                let target = next_target(
                    core.queue.len(),
                    core.current_index,
                    core.repeat,
                    core.shuffle,
                    &mut rand::thread_rng(),
                );
                if target.is_none() {
                    // End of queue: paused, state intact. Not a stop.
                    core.is_playing = false;
                    self.publish(&core);
                }
                target
            };
            match target {
                Some(index) => self.begin_load(None, index).await,
                None => self.emit(PlaybackEvent::QueueEnded),
            }
        })
    }

    /// Apply engine status reports for the handle loaded under
    /// `generation` until the stream ends or a newer load takes over.
    async fn pump_status(
        self: Arc<Self>,
        generation: u64,
        mut status_rx: mpsc::UnboundedReceiver<EngineStatus>,
    ) {
        while let Some(status) = status_rx.recv().await {
            if !status.is_loaded {
                continue;
            }
            let finished = {
                let mut core = self.core.lock().await;
                if self.generation.load(Ordering::SeqCst) != generation {
                    // Stale handle; its reports no longer apply.
                    break;
                }
                core.position = status.position;
                core.duration = status.duration.unwrap_or(Duration::ZERO);
                core.is_playing = status.is_playing;
                self.publish(&core);
                if status.did_just_finish {
                    core.current.clone()
                } else {
                    None
                }
            };
            if let Some(track) = finished {
                self.emit(PlaybackEvent::TrackFinished {
                    track: track.id.clone(),
                });
                if let Some(history) = self.history.clone() {
                    let track_id = track.id.clone();
                    tokio::spawn(async move {
                        if let Err(err) = history.record_listen(&track_id).await {
                            debug!(track = %track_id, error = %err, "listen report failed");
                        }
                    });
                }
                self.clone().advance().await;
            }
        }
    }
}

/// Where playback goes after the entry at `current`, given the active
/// policy. `None` means the queue is over.
fn next_target<R: rand::Rng>(
    len: usize,
    current: usize,
    repeat: RepeatMode,
    is_shuffle: bool,
    rng: &mut R,
) -> Option<usize> {
    match repeat {
        RepeatMode::One => Some(current),
        _ if is_shuffle => Some(shuffle::pick_next_index(len, current, rng)),
        _ if current + 1 < len => Some(current + 1),
        RepeatMode::All => Some(0),
        RepeatMode::None => None,
    }
}
