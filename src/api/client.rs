//! YouTube Data API v3 client.
//!
//! Listing a channel's videos takes two calls: one `playlistItems` page of
//! the channel's uploads playlist for the video ids, then one `videos`
//! call for statistics and durations.

use async_trait::async_trait;
use log::debug;

use super::types::{Channel, ChannelItem, ListResponse, PlaylistItem, Video, VideoItem};
use super::{ApiError, VideoSource};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub struct YoutubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YoutubeClient {
    /// `base_url` overrides the Google endpoint (used by tests).
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// A channel's uploads playlist shares its id, with the `UC` prefix
/// swapped for `UU`.
fn uploads_playlist_id(channel_id: &str) -> String {
    match channel_id.strip_prefix("UC") {
        Some(suffix) => format!("UU{suffix}"),
        None => channel_id.to_string(),
    }
}

#[async_trait]
impl VideoSource for YoutubeClient {
    async fn channels(&self, ids: &[String]) -> Result<Vec<Channel>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        debug!("fetching {} channels", ids.len());
        let joined = ids.join(",");
        let response: ListResponse<ChannelItem> = self
            .get_json(
                "channels",
                &[
                    ("part", "snippet,statistics"),
                    ("id", joined.as_str()),
                    ("maxResults", "50"),
                ],
            )
            .await?;
        Ok(response.items.into_iter().map(Channel::from).collect())
    }

    async fn videos_for_channel(&self, channel_id: &str) -> Result<Vec<Video>, ApiError> {
        let playlist = uploads_playlist_id(channel_id);
        debug!("fetching uploads playlist {playlist}");
        let page: ListResponse<PlaylistItem> = self
            .get_json(
                "playlistItems",
                &[
                    ("part", "snippet"),
                    ("playlistId", playlist.as_str()),
                    ("maxResults", "50"),
                ],
            )
            .await?;

        let video_ids: Vec<String> = page
            .items
            .into_iter()
            .map(|item| item.snippet.resource_id.video_id)
            .collect();
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = video_ids.join(",");
        let response: ListResponse<VideoItem> = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet,statistics,contentDetails"),
                    ("id", joined.as_str()),
                ],
            )
            .await?;
        Ok(response.items.into_iter().map(Video::from).collect())
    }
}
