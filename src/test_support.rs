//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{TimeZone, Utc};

use crate::api::types::{Channel, Video};
use crate::core::columns::{ColumnSpec, FieldId, Pad};
use crate::core::state::App;

/// Three channels with the subscriber spread the fitting tests care about.
pub fn sample_channels() -> Vec<Channel> {
    vec![
        Channel {
            id: String::from("UCaaa"),
            title: String::from("Alpha"),
            subscriber_count: 10,
            view_count: 1_000,
            video_count: 3,
        },
        Channel {
            id: String::from("UCbbb"),
            title: String::from("Bravo"),
            subscriber_count: 2_000_000,
            view_count: 900_000_000,
            video_count: 812,
        },
        Channel {
            id: String::from("UCccc"),
            title: String::from("Charlie"),
            subscriber_count: 5,
            view_count: 40,
            video_count: 1,
        },
    ]
}

pub fn sample_videos() -> Vec<Video> {
    vec![
        Video {
            id: String::from("vid1"),
            title: String::from("First upload"),
            channel_title: String::from("Alpha"),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            view_count: 1_234,
            likes: 75,
            dislikes: 25,
            duration_secs: 253,
        },
        Video {
            id: String::from("vid2"),
            title: String::from("Second upload"),
            channel_title: String::from("Alpha"),
            published_at: Utc.with_ymd_and_hms(2024, 6, 2, 12, 30, 0).unwrap(),
            view_count: 98,
            likes: 0,
            dislikes: 0,
            duration_secs: 3_723,
        },
    ]
}

pub fn channel_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Subscribers", FieldId::SubscriberCount, Pad::None, 4),
        ColumnSpec::new("Title", FieldId::Title, Pad::Right, 10),
    ]
}

pub fn video_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Duration", FieldId::Duration, Pad::None, 10),
        ColumnSpec::new("Title", FieldId::Title, Pad::Right, 10),
        ColumnSpec::new("User", FieldId::ChannelTitle, Pad::Left, 2),
    ]
}

/// Creates a test App with the sample column sets and no data yet.
pub fn test_app() -> App {
    App::new(video_columns(), channel_columns())
}
