//! Domain records (the rows the list engine displays) and the wire shapes
//! of the YouTube Data API v3 responses they are built from.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::columns::FieldId;
use crate::core::record::{FieldValue, Record};

// ============================================================================
// Domain Records
// ============================================================================

/// A subscribed channel row.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub id: String,
    pub title: String,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
}

impl Record for Channel {
    fn field(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::Id => FieldValue::Text(self.id.clone()),
            FieldId::Title => FieldValue::Text(self.title.clone()),
            FieldId::SubscriberCount => FieldValue::Count(self.subscriber_count),
            FieldId::ViewCount => FieldValue::Count(self.view_count),
            FieldId::VideoCount => FieldValue::Count(self.video_count),
            other => panic!("channel records have no {other:?} field"),
        }
    }
}

/// One video row in a channel's list.
#[derive(Clone, Debug, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub likes: u64,
    pub dislikes: u64,
    pub duration_secs: u64,
}

impl Video {
    /// `likes / (likes + dislikes) * 100`; `None` when nobody has rated.
    pub fn like_percentage(&self) -> Option<f64> {
        let total = self.likes + self.dislikes;
        (total > 0).then(|| self.likes as f64 / total as f64 * 100.0)
    }
}

impl Record for Video {
    fn field(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::Id => FieldValue::Text(self.id.clone()),
            FieldId::Title => FieldValue::Text(self.title.clone()),
            FieldId::ChannelTitle => FieldValue::Text(self.channel_title.clone()),
            FieldId::PublishedAt => FieldValue::Date(self.published_at),
            FieldId::ViewCount => FieldValue::Count(self.view_count),
            FieldId::LikePercentage => FieldValue::Percentage(self.like_percentage()),
            FieldId::Duration => FieldValue::Duration(self.duration_secs),
            other => panic!("video records have no {other:?} field"),
        }
    }
}

// ============================================================================
// Wire Format (YouTube Data API v3)
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ListResponse<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelItem {
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelSnippet {
    pub title: String,
}

/// Statistics counters arrive as JSON strings ("1234"), and may be absent
/// entirely (hidden subscriber counts).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelStatistics {
    #[serde(default)]
    pub subscriber_count: String,
    #[serde(default)]
    pub view_count: String,
    #[serde(default)]
    pub video_count: String,
}

impl From<ChannelItem> for Channel {
    fn from(item: ChannelItem) -> Self {
        Channel {
            id: item.id,
            title: item.snippet.title,
            subscriber_count: parse_count(&item.statistics.subscriber_count),
            view_count: parse_count(&item.statistics.view_count),
            video_count: parse_count(&item.statistics.video_count),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItemSnippet {
    pub resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResourceId {
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
    pub content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoStatistics {
    #[serde(default)]
    pub view_count: String,
    #[serde(default)]
    pub like_count: String,
    #[serde(default)]
    pub dislike_count: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentDetails {
    /// ISO-8601 duration, e.g. `PT4M13S`.
    #[serde(default)]
    pub duration: String,
}

impl From<VideoItem> for Video {
    fn from(item: VideoItem) -> Self {
        Video {
            id: item.id,
            title: item.snippet.title,
            channel_title: item.snippet.channel_title,
            published_at: item.snippet.published_at,
            view_count: parse_count(&item.statistics.view_count),
            likes: parse_count(&item.statistics.like_count),
            dislikes: parse_count(&item.statistics.dislike_count),
            duration_secs: parse_duration(&item.content_details.duration),
        }
    }
}

/// Counter fields are decimal strings; anything unparseable counts as 0.
fn parse_count(s: &str) -> u64 {
    s.parse().unwrap_or(0)
}

/// Parses an ISO-8601 duration of the `PT#H#M#S` family (plus the `#D`
/// day designator for very long streams) to whole seconds. Unrecognized
/// input yields 0 rather than failing the whole fetch.
pub(crate) fn parse_duration(s: &str) -> u64 {
    let Some(body) = s.strip_prefix('P') else {
        return 0;
    };
    let mut secs = 0u64;
    let mut num = 0u64;
    let mut in_time = false;
    for ch in body.chars() {
        match ch {
            '0'..='9' => num = num * 10 + u64::from(ch) - u64::from('0'),
            'T' => {
                in_time = true;
                num = 0;
            }
            'D' => {
                secs += num * 86_400;
                num = 0;
            }
            'H' => {
                secs += num * 3_600;
                num = 0;
            }
            'M' if in_time => {
                secs += num * 60;
                num = 0;
            }
            'S' => {
                secs += num;
                num = 0;
            }
            _ => num = 0,
        }
    }
    secs
}
