//! Audio engine abstraction
//!
//! The session drives playback through these traits; the concrete engine
//! lives with the platform shell (native decoder, web audio, a test fake).

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors surfaced by an [`AudioEngine`] or [`AudioHandle`]
#[derive(Debug, Error)]
pub enum EngineError {
    /// One-time engine setup failed
    #[error("audio engine configuration failed: {0}")]
    Configure(String),

    /// The engine could not load or start a stream
    #[error("failed to load stream: {0}")]
    Load(String),

    /// A pause/resume/seek/release command was rejected
    #[error("engine command failed: {0}")]
    Command(String),
}

/// Result alias for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Channel the engine pushes status reports into for the lifetime of a
/// loaded handle
pub type StatusSender = mpsc::UnboundedSender<EngineStatus>;

/// A status report from the engine about the currently loaded stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStatus {
    /// Whether the stream is loaded and the other fields are meaningful
    pub is_loaded: bool,

    /// Current playback position
    pub position: Duration,

    /// Total stream duration, when the engine knows it
    pub duration: Option<Duration>,

    /// Whether audio is progressing
    pub is_playing: bool,

    /// Set exactly once, on the report that observes natural end of stream
    pub did_just_finish: bool,
}

/// Platform audio backend.
///
/// Implementations must be safe to call from multiple tasks; the session
/// serializes its own state but may issue engine calls concurrently with a
/// superseded load finishing in the background.
#[async_trait]
pub trait AudioEngine: Send + Sync {
    /// One-time process-wide setup (output routing, silent-mode override,
    /// background audio). Called lazily before the first load; must be
    /// idempotent.
    async fn configure(&self) -> EngineResult<()>;

    /// Load `url` and return a handle plus the initial status.
    ///
    /// With `autoplay` set, playback starts as soon as enough data is
    /// buffered. Ongoing status reports go through `status`; the engine
    /// stops sending once the handle is released or the receiver is gone.
    async fn load(
        &self,
        url: &str,
        autoplay: bool,
        status: StatusSender,
    ) -> EngineResult<(Box<dyn AudioHandle>, EngineStatus)>;
}

/// Control surface for one loaded stream.
///
/// Exactly one live handle exists per session; [`release`](AudioHandle::release)
/// frees the underlying platform resources and must be called before a
/// replacement is loaded.
#[async_trait]
pub trait AudioHandle: Send + Sync {
    /// Pause playback, keeping the stream loaded
    async fn pause(&self) -> EngineResult<()>;

    /// Resume a paused stream
    async fn resume(&self) -> EngineResult<()>;

    /// Jump to an absolute position
    async fn seek(&self, position: Duration) -> EngineResult<()>;

    /// Tear down the stream and free engine resources
    async fn release(&self) -> EngineResult<()>;
}
