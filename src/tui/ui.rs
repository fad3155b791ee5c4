use crate::core::state::Session;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ControlBar, Flashcard, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const KEY_HELP: &str =
    "Enter/Space flip · h hint · f favorite · p play · s shuffle · ←/→ move · F fullscreen · q quit";

/// Screen regions. Fullscreen drops the title bar and key help.
struct Regions {
    title: Option<Rect>,
    card: Rect,
    controls: Rect,
    help: Option<Rect>,
}

fn regions(area: Rect, is_fullscreen: bool) -> Regions {
    use Constraint::{Length, Min};
    if is_fullscreen {
        let [card, controls] = Layout::vertical([Min(0), Length(3)]).areas(area);
        Regions {
            title: None,
            card,
            controls,
            help: None,
        }
    } else {
        let [title, card, controls, help] =
            Layout::vertical([Length(1), Min(0), Length(3), Length(1)]).areas(area);
        Regions {
            title: Some(title),
            card,
            controls,
            help: Some(help),
        }
    }
}

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState, spinner_frame: usize) {
    let regions = regions(frame.area(), session.is_fullscreen());

    if let Some(title_area) = regions.title {
        let status = if session.is_loading() {
            format!(
                "{} {}",
                SPINNER[spinner_frame % SPINNER.len()],
                session.status_message()
            )
        } else {
            session.status_message().to_string()
        };
        TitleBar::new(status, session.is_favorite()).render(frame, title_area);
    }

    let hint = if session.show_hint() {
        session.hint_text()
    } else {
        None
    };
    Flashcard {
        card: session.current_card(),
        show_answer: session.show_answer(),
        hint,
        is_favorite: session.is_favorite(),
    }
    .render(frame, regions.card);
    // Cache for mouse hit testing
    tui.card_area = Flashcard::card_rect(regions.card);

    ControlBar {
        is_playing: session.is_playing(),
        is_fullscreen: session.is_fullscreen(),
        has_cards: session.total() > 0,
        position_label: session.position_label(),
    }
    .render(frame, regions.controls);

    if let Some(help_area) = regions.help {
        let help = Paragraph::new(Line::styled(KEY_HELP, Style::default().fg(Color::DarkGray)))
            .centered();
        frame.render_widget(help, help_area);
    }
}
