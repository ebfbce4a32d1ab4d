//! # Application State
//!
//! All mutable state for a running session in one place, owned by the
//! event loop. No globals; the TUI borrows this struct for drawing and
//! the reducer in `action.rs` is the only thing that changes it.
//!
//! ```text
//! App
//! ├── subs: Option<ListEngine<Channel>>    // None until the first fetch lands
//! ├── vids: HashMap<id, ListEngine<Video>> // lazily built, never evicted
//! ├── view: View                           // which engine the UI shows
//! ├── pending: Option<String>              // channel the user is waiting on
//! └── status: String                       // title bar text
//! ```
//!
//! The caches own every engine; `view` only names one. Background fetches
//! publish whole record lists through `Action` messages, so a draw sees
//! either the old list or the new one, never something in between.

use std::collections::HashMap;

use crate::api::types::{Channel, Video};
use crate::core::columns::ColumnSpec;
use crate::core::list::ListEngine;

/// Which list the UI is currently showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Subscriptions,
    /// A channel's videos, keyed by channel id.
    Videos(String),
}

pub struct App {
    pub subs: Option<ListEngine<Channel>>,
    pub vids: HashMap<String, ListEngine<Video>>,
    pub view: View,
    pub pending: Option<String>,
    pub status: String,
    pub video_columns: Vec<ColumnSpec>,
    pub channel_columns: Vec<ColumnSpec>,
}

impl App {
    pub fn new(video_columns: Vec<ColumnSpec>, channel_columns: Vec<ColumnSpec>) -> Self {
        Self {
            subs: None,
            vids: HashMap::new(),
            view: View::Subscriptions,
            pending: None,
            status: String::from("Loading subscriptions..."),
            video_columns,
            channel_columns,
        }
    }

    /// Moves the active list's cursor; a no-op while the active list has
    /// no data yet.
    pub fn move_selection(&mut self, delta: i64) {
        match self.view.clone() {
            View::Subscriptions => {
                if let Some(engine) = self.subs.as_mut() {
                    engine.select_rel(delta);
                }
            }
            View::Videos(id) => {
                if let Some(engine) = self.vids.get_mut(&id) {
                    engine.select_rel(delta);
                }
            }
        }
    }

    /// Title of the channel the view names, for the title bar.
    pub fn channel_title(&self, channel_id: &str) -> Option<String> {
        self.subs.as_ref().and_then(|subs| {
            subs.records()
                .iter()
                .find(|channel| channel.id == channel_id)
                .map(|channel| channel.title.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::state::View;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.view, View::Subscriptions);
        assert!(app.subs.is_none());
        assert!(app.vids.is_empty());
        assert!(app.pending.is_none());
        assert_eq!(app.status, "Loading subscriptions...");
    }

    #[test]
    fn test_move_selection_before_data_arrives_is_a_noop() {
        let mut app = test_app();
        app.move_selection(1);
        assert!(app.subs.is_none());
    }
}
