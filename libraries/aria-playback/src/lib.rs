//! Aria Player - Playback Session
//!
//! Platform-agnostic playback session management for the Aria client.
//!
//! This crate provides:
//! - A single-writer [`PlaybackSession`] owning the play queue, the current
//!   track, and the one live audio handle
//! - Repeat modes (none, one, all) and random shuffle
//! - Automatic skip-forward recovery when a track cannot be resolved or
//!   loaded
//! - Observable state via a `tokio::sync::watch` snapshot channel plus a
//!   broadcast event stream
//!
//! # Architecture
//!
//! `aria-playback` knows nothing about HTTP or audio decoding. Its three
//! collaborators are traits supplied by the caller:
//! - [`StreamResolver`] turns a track ID into a time-limited playable URL
//! - [`AudioEngine`] / [`AudioHandle`] wrap the platform media API
//! - [`HistoryRecorder`] receives best-effort "track was listened to"
//!   notifications
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aria_playback::{PlaybackSession, QueuedTrack, SessionConfig};
//! # use aria_playback::{AudioEngine, StreamResolver};
//! # fn collaborators() -> (Arc<dyn AudioEngine>, Arc<dyn StreamResolver>) { unimplemented!() }
//!
//! # async fn run() {
//! let (engine, resolver) = collaborators();
//! let session = PlaybackSession::new(engine, resolver, None, SessionConfig::default());
//!
//! let track = QueuedTrack::new("trk-1", "Night Drive", 1);
//! session.play_track(track, None).await;
//! session.pause().await;
//! session.next().await;
//! # }
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod events;
mod history;
mod queue;
mod resolver;
mod session;
mod shuffle;
pub mod types;

// Public exports
pub use engine::{AudioEngine, AudioHandle, EngineError, EngineResult, EngineStatus, StatusSender};
pub use error::PlaybackError;
pub use events::PlaybackEvent;
pub use history::{HistoryRecorder, RecordError};
pub use queue::PlayQueue;
pub use resolver::{ResolveError, StreamResolver};
pub use session::PlaybackSession;
pub use types::{PlaybackSnapshot, QueuedTrack, RepeatMode, SessionConfig};
