use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events.
#[derive(Debug, PartialEq, Eq)]
pub enum TuiEvent {
    /// Esc or 'q'.
    Quit,
    /// Ctrl+C.
    ForceQuit,
    CursorUp,
    CursorDown,
    /// Right arrow or Enter: drill into the selected channel.
    NavigateInto,
    /// Left arrow or Backspace: back to subscriptions.
    NavigateBack,
    /// Terminal size changed; layout is recomputed on the next draw.
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read() {
        Ok(Event::Key(key)) => match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
            (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
            (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
            (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
            (_, KeyCode::Right) | (_, KeyCode::Enter) => Some(TuiEvent::NavigateInto),
            (_, KeyCode::Left) | (_, KeyCode::Backspace) => Some(TuiEvent::NavigateBack),
            _ => None,
        },
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
