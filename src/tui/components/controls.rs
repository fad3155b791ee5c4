//! # ControlBar Component
//!
//! The row of controls under the card:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ ▶ Play [p]   Shuffle [s]   ← [k]   3 / 8   [j] →   Fullscreen [F] │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prev/next are dimmed while the deck is empty, mirroring the no-op.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

pub struct ControlBar {
    pub is_playing: bool,
    pub is_fullscreen: bool,
    pub has_cards: bool,
    pub position_label: String,
}

impl ControlBar {
    fn line(&self) -> Line<'static> {
        let key = Style::default().fg(Color::DarkGray);
        let nav = if self.has_cards {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        let play = if self.is_playing { "❚❚ Pause" } else { "▶ Play" };
        let fullscreen = if self.is_fullscreen {
            "Exit Fullscreen"
        } else {
            "Fullscreen"
        };
        let gap = || Span::raw("   ");

        Line::from(vec![
            Span::raw(play),
            Span::styled(" [p]", key),
            gap(),
            Span::raw("Shuffle"),
            Span::styled(" [s]", key),
            gap(),
            Span::styled("←", nav),
            Span::styled(" [k]", key),
            gap(),
            Span::styled(
                self.position_label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            gap(),
            Span::styled("[j] ", key),
            Span::styled("→", nav),
            gap(),
            Span::raw(fullscreen),
            Span::styled(" [F]", key),
        ])
    }
}

impl Component for ControlBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().add_modifier(Modifier::DIM)));
        frame.render_widget(paragraph, area);
    }
}
