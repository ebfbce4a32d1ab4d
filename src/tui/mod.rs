//! # TUI Adapter
//!
//! The ratatui-specific layer: terminal lifecycle, the event loop, and
//! the spawning of background fetches. This is the only module that knows
//! about ratatui and crossterm.
//!
//! ## Concurrency
//!
//! Rendering and input handling are single-threaded; this loop is the
//! only consumer of terminal state. Network fetches run as tokio tasks
//! and publish whole result lists back through a `std::sync::mpsc`
//! channel as [`Action`] messages — one message per list, so the loop
//! either keeps drawing the previous list or sees the complete new one.
//! In-flight fetches are never cancelled; a result the user stopped
//! waiting for still lands in the cache for later.

mod event;
mod ui;

use log::{info, warn};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crate::api::VideoSource;
use crate::core::action::{Action, Effect, update};
use crate::core::config::TubeConfig;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub fn run(source: Arc<dyn VideoSource>, config: &TubeConfig) -> std::io::Result<()> {
    let mut app = App::new(config.video_columns.clone(), config.channel_columns.clone());

    let mut terminal = ratatui::init();

    // Channel for actions published by background fetch tasks.
    let (tx, rx) = mpsc::channel();

    spawn_subscriptions_fetch(source.clone(), config.subscriptions.clone(), tx.clone());

    let mut running = true;
    while running {
        terminal.draw(|f| ui::draw_ui(f, &mut app))?;

        // Block for the next event, then drain whatever else is queued so
        // a held-down arrow key coalesces into a single redraw. The
        // timeout bounds how long a background fetch result can wait.
        let first = poll_event_timeout(Duration::from_millis(250));
        for event in first
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                // The draw at the top of the loop picks up the new size.
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
                TuiEvent::CursorUp => Action::MoveSelection(-1),
                TuiEvent::CursorDown => Action::MoveSelection(1),
                TuiEvent::NavigateInto => Action::NavigateInto,
                TuiEvent::NavigateBack => Action::NavigateBack,
            };
            match update(&mut app, action) {
                Effect::Quit => running = false,
                Effect::FetchVideos(channel_id) => {
                    spawn_videos_fetch(source.clone(), channel_id, tx.clone());
                }
                Effect::None => {}
            }
        }

        // Fetch results: applied between draws, never mid-frame.
        while let Ok(action) = rx.try_recv() {
            match update(&mut app, action) {
                Effect::Quit => running = false,
                Effect::FetchVideos(channel_id) => {
                    spawn_videos_fetch(source.clone(), channel_id, tx.clone());
                }
                Effect::None => {}
            }
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_subscriptions_fetch(
    source: Arc<dyn VideoSource>,
    ids: Vec<String>,
    tx: mpsc::Sender<Action>,
) {
    info!("spawning subscriptions fetch ({} channels)", ids.len());
    tokio::spawn(async move {
        let result = source.channels(&ids).await.map_err(|e| e.to_string());
        if let Err(ref e) = result {
            warn!("subscription fetch failed: {e}");
        }
        if tx.send(Action::SubscriptionsLoaded(result)).is_err() {
            warn!("event loop gone before subscriptions arrived");
        }
    });
}

fn spawn_videos_fetch(
    source: Arc<dyn VideoSource>,
    channel_id: String,
    tx: mpsc::Sender<Action>,
) {
    info!("spawning video fetch for {channel_id}");
    tokio::spawn(async move {
        let result = source
            .videos_for_channel(&channel_id)
            .await
            .map_err(|e| e.to_string());
        if let Err(ref e) = result {
            warn!("video fetch for {channel_id} failed: {e}");
        }
        if tx
            .send(Action::VideosLoaded { channel_id, result })
            .is_err()
        {
            warn!("event loop gone before videos arrived");
        }
    });
}
