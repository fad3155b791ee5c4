//! # TitleBar Component
//!
//! Top status bar: app name, status message and the favorite marker.
//!
//! Stateless; it renders what it's given:
//!
//! 1. **Status message**: `"Flashdeck | 8 cards"`
//! 2. **Default**: `"Flashdeck"`
//!
//! A `★` is right-aligned on the same line while the session is marked as
//! favorite. Hidden entirely in fullscreen.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub struct TitleBar {
    /// Status message (e.g., "Loading definitions…", "Playing")
    pub status_message: String,
    /// Whether the session is marked as favorite
    pub is_favorite: bool,
}

impl TitleBar {
    pub fn new(status_message: String, is_favorite: bool) -> Self {
        Self {
            status_message,
            is_favorite,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            "Flashdeck".to_string()
        } else {
            format!("Flashdeck | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(Line::raw(self.title_text())), area);

        if self.is_favorite {
            let star = Paragraph::new("★ favorite")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Right);
            frame.render_widget(star, area);
        }
    }
}
