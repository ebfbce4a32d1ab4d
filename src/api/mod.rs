//! # Data Source
//!
//! The remote video service, specified at its interface: fetch channels
//! by id list, fetch videos by channel id. [`YoutubeClient`] is the real
//! implementation; tests substitute canned data via [`VideoSource`].

mod client;
pub mod types;

pub use client::YoutubeClient;

use std::fmt;

use async_trait::async_trait;

use types::{Channel, Video};

/// Errors from the remote video service. Never fatal to the process; the
/// affected list degrades to empty and navigation retries the fetch.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// Response body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// What the UI needs from the video service.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Fetches metadata for the given channel ids, in service order.
    async fn channels(&self, ids: &[String]) -> Result<Vec<Channel>, ApiError>;

    /// Fetches a channel's most recent uploads.
    async fn videos_for_channel(&self, channel_id: &str) -> Result<Vec<Video>, ApiError>;
}
