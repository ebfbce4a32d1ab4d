//! # Actions
//!
//! Everything that can happen becomes an `Action`. Arrow key? That's
//! `Action::MoveSelection`. A background fetch finishing? That's
//! `Action::VideosLoaded`.
//!
//! The `update()` function applies one action to the state and returns an
//! [`Effect`] telling the event loop what I/O to start. No side effects
//! here; spawning and drawing happen in the `tui` module.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```

use crate::api::types::{Channel, Video};
use crate::core::list::ListEngine;
use crate::core::state::{App, View};

/// One thing that happened, from the keyboard or a background task.
/// Fetch results carry `Result<_, String>` rather than the API error type
/// so actions stay cheap to log and send across the channel.
#[derive(Debug)]
pub enum Action {
    MoveSelection(i64),
    /// Drill into the selected channel's videos.
    NavigateInto,
    /// Return to the subscriptions list.
    NavigateBack,
    Quit,
    SubscriptionsLoaded(Result<Vec<Channel>, String>),
    VideosLoaded {
        channel_id: String,
        result: Result<Vec<Video>, String>,
    },
}

/// I/O the event loop must start after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Spawn a background fetch of this channel's videos.
    FetchVideos(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::MoveSelection(delta) => {
            app.move_selection(delta);
            Effect::None
        }

        Action::NavigateBack => {
            app.view = View::Subscriptions;
            app.pending = None;
            Effect::None
        }

        Action::NavigateInto => {
            if app.view != View::Subscriptions {
                return Effect::None;
            }
            let Some(channel) = app.subs.as_ref().and_then(|subs| subs.selected_record())
            else {
                return Effect::None;
            };
            let id = channel.id.clone();
            if app.vids.contains_key(&id) {
                app.view = View::Videos(id);
                return Effect::None;
            }
            if app.pending.as_deref() == Some(id.as_str()) {
                // Already fetching this channel.
                return Effect::None;
            }
            app.status = format!("Loading videos for {}...", channel.title);
            app.pending = Some(id.clone());
            Effect::FetchVideos(id)
        }

        Action::SubscriptionsLoaded(Ok(channels)) => {
            app.status = format!("{} subscriptions", channels.len());
            app.subs = Some(ListEngine::new(channels, app.channel_columns.clone()));
            Effect::None
        }

        Action::SubscriptionsLoaded(Err(message)) => {
            // Degrade to an empty list; the process stays up.
            app.status = format!("Subscription fetch failed: {message}");
            app.subs = Some(ListEngine::new(Vec::new(), app.channel_columns.clone()));
            Effect::None
        }

        Action::VideosLoaded { channel_id, result } => match result {
            Ok(videos) => {
                app.vids.insert(
                    channel_id.clone(),
                    ListEngine::new(videos, app.video_columns.clone()),
                );
                // Only follow the fetch the user is still waiting on; a
                // late result from an abandoned navigation just lands in
                // the cache.
                if app.pending.as_deref() == Some(channel_id.as_str()) {
                    app.pending = None;
                    app.status.clear();
                    app.view = View::Videos(channel_id);
                }
                Effect::None
            }
            Err(message) => {
                // Nothing cached on failure: navigating into the channel
                // again retries the fetch.
                if app.pending.as_deref() == Some(channel_id.as_str()) {
                    app.pending = None;
                }
                app.status = format!("Video fetch failed: {message}");
                Effect::None
            }
        },
    }
}
