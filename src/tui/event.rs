use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    FlipCard,
    ToggleHint,
    ToggleFavorite,
    TogglePlay,
    Shuffle,
    Prev,
    Next,
    ToggleFullscreen,

    // TUI-local events (handled directly in TUI)
    MouseClick(u16, u16),
    Resize,
}

impl TuiEvent {
    /// The core action for this event, if it maps to one without layout info.
    pub fn action(self) -> Option<Action> {
        match self {
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::FlipCard => Some(Action::ToggleAnswer),
            TuiEvent::ToggleHint => Some(Action::ToggleHint),
            TuiEvent::ToggleFavorite => Some(Action::ToggleFavorite),
            TuiEvent::TogglePlay => Some(Action::TogglePlay),
            TuiEvent::Shuffle => Some(Action::Shuffle),
            TuiEvent::Prev => Some(Action::Prev),
            TuiEvent::Next => Some(Action::Next),
            TuiEvent::ToggleFullscreen => Some(Action::RequestFullscreenToggle),
            TuiEvent::MouseClick(..) | TuiEvent::Resize => None,
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(ev) => map_event(ev),
            Err(e) => {
                log::warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            log::warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

fn map_event(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(..) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some platforms also report releases
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::FlipCard),
        (_, KeyCode::Char('h')) => Some(TuiEvent::ToggleHint),
        (_, KeyCode::Char('f')) => Some(TuiEvent::ToggleFavorite),
        (_, KeyCode::Char('p')) => Some(TuiEvent::TogglePlay),
        (_, KeyCode::Char('s')) => Some(TuiEvent::Shuffle),
        (_, KeyCode::Left) | (_, KeyCode::Char('k')) => Some(TuiEvent::Prev),
        (_, KeyCode::Right) | (_, KeyCode::Char('j')) => Some(TuiEvent::Next),
        (_, KeyCode::F(11)) | (_, KeyCode::Char('F')) => Some(TuiEvent::ToggleFullscreen),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}
