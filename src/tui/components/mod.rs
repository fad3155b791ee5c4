//! # TUI Components
//!
//! All UI components for the terminal interface. Every component is
//! props-based: it receives the data it shows as struct fields and never
//! reaches into the `Session` itself.
//!
//! - `TitleBar`: status line with the favorite marker
//! - `Flashcard`: the card, front or back, with the hint
//! - `ControlBar`: play/shuffle/prev/counter/next/fullscreen row
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(session.status_message().to_string(), session.is_favorite())
//!     .render(frame, area);
//!
//! // Bad: hidden dependency on the session
//! title_bar.render(frame, area); // reads from a global Session
//! ```

pub mod controls;
pub mod flashcard;
mod title_bar;

pub use controls::ControlBar;
pub use flashcard::Flashcard;
pub use title_bar::TitleBar;
