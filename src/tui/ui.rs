//! Frame layout: a one-line title bar, the active list below it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::state::{App, View};

pub fn draw_ui(frame: &mut Frame, app: &mut App) {
    use Constraint::{Length, Min};
    let [title_area, list_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let heading = match &app.view {
        View::Subscriptions => String::from("subscriptions"),
        View::Videos(id) => app
            .channel_title(id)
            .unwrap_or_else(|| id.clone()),
    };
    let title_text = if app.status.is_empty() {
        format!("tube | {heading}")
    } else {
        format!("tube | {heading} | {}", app.status)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    match app.view.clone() {
        View::Subscriptions => match app.subs.as_mut() {
            Some(engine) => engine.draw(frame, list_area),
            None => frame.render_widget(Paragraph::new("Loading subscriptions..."), list_area),
        },
        View::Videos(id) => match app.vids.get_mut(&id) {
            Some(engine) => engine.draw(frame, list_area),
            // The view can briefly name a channel whose fetch has not
            // landed; keep a placeholder until it does.
            None => frame.render_widget(Paragraph::new("Loading videos..."), list_area),
        },
    }
}
