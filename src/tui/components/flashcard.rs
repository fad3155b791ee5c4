//! # Flashcard Component
//!
//! The card itself. The front shows the question (and the hint when
//! toggled); the back shows the answer. Flipping is just `show_answer`.
//!
//! ```text
//! ┌ Question ─────────────────────── ★ ┐
//! │                                    │
//! │              Apple                 │
//! │                                    │
//! │    Hint: A common, round fruit…    │
//! └────────────── Enter/Space to flip ─┘
//! ```
//!
//! While the deck is still loading the front reads `Loading…` and there is
//! no back to flip to.

use crate::core::card::CardView;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

pub const LOADING_MARKER: &str = "Loading…";

/// Widest the card gets; narrower terminals shrink it.
const MAX_CARD_WIDTH: u16 = 64;
const MAX_CARD_HEIGHT: u16 = 14;

pub struct Flashcard<'a> {
    pub card: CardView<'a>,
    pub show_answer: bool,
    pub hint: Option<String>,
    pub is_favorite: bool,
}

impl<'a> Flashcard<'a> {
    /// Centered rectangle the card occupies inside `area`.
    ///
    /// Also used for mouse hit testing, so it must match `render`.
    pub fn card_rect(area: Rect) -> Rect {
        let width = area.width.min(MAX_CARD_WIDTH);
        let height = area.height.min(MAX_CARD_HEIGHT);
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [rect] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        rect
    }

    fn face_lines(&self) -> (&'static str, Vec<Line<'a>>) {
        let heading = Style::default().add_modifier(Modifier::BOLD);
        match self.card {
            CardView::Loading => (
                "Question",
                vec![Line::styled(LOADING_MARKER, heading.fg(Color::DarkGray))],
            ),
            CardView::Card(card) if self.show_answer => {
                ("Answer", vec![Line::styled(card.answer.as_str(), heading)])
            }
            CardView::Card(card) => {
                let mut lines = vec![Line::styled(card.question.as_str(), heading)];
                if let Some(hint) = &self.hint {
                    lines.push(Line::raw(""));
                    lines.push(Line::from(vec![
                        Span::styled("Hint: ", Style::default().fg(Color::Yellow)),
                        Span::styled(hint.clone(), Style::default().fg(Color::Yellow)),
                    ]));
                }
                ("Question", lines)
            }
        }
    }
}

impl Component for Flashcard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = Self::card_rect(area);
        let (face, lines) = self.face_lines();

        let border_style = if self.show_answer {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let star = if self.is_favorite {
            Span::styled(" ★ ", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(" ☆ ", Style::default().fg(Color::DarkGray))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {face} "))
            .title(Line::from(star).right_aligned())
            .title_bottom(Line::from(" Enter/Space to flip ").right_aligned());

        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        // Vertically center the text inside the card
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let text_height = (paragraph.line_count(inner.width) as u16).min(inner.height);
        let [text_area] = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(paragraph, text_area);
    }
}
