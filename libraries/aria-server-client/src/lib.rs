//! Aria Player - Server Client
//!
//! REST client for the Aria streaming server.
//!
//! Every endpoint speaks the uniform `{ data, error, meta }` envelope and
//! snake_case JSON defined in `aria-core`. The client stores its bearer
//! token behind an async lock, so one instance can be shared freely across
//! tasks (and handed to a playback session as its resolver and history
//! recorder).
//!
//! # Example
//!
//! ```ignore
//! use aria_server_client::{AriaClient, ClientConfig};
//!
//! let client = AriaClient::new(ClientConfig::new("https://aria.example.com"))?;
//!
//! let session = client.login("listener@example.com", "password").await?;
//! println!("Logged in as {}", session.user.email);
//!
//! let albums = client.albums(None).await?;
//! println!("Found {} albums", albums.len());
//!
//! let stream = client.stream_url(&albums[0].id.as_str().into()).await?;
//! println!("Play from {}", stream.url);
//! ```

#![forbid(unsafe_code)]

mod auth;
mod catalog;
mod client;
mod error;
mod streaming;
mod types;

pub use client::AriaClient;
pub use error::{ClientError, Result};
pub use types::ClientConfig;
