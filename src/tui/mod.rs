//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the session,
//! and translates keyboard/mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread owns the `Session`. Background tasks (deck loading, autoplay
//! ticks, fullscreen notifications) never touch it; they send `Action`s
//! through an mpsc channel that the loop drains between input polls. Every
//! action goes through `dispatch()`, which applies it with `update()`,
//! re-syncs the autoplay timer and carries out the returned `Effect`.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 200ms, only redraws on input, channel actions
//!   or terminal resize.

mod component;
mod components;
mod event;
pub mod fullscreen;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::autoplay::Autoplay;
use crate::core::config::ResolvedConfig;
use crate::core::loader::load_deck;
use crate::core::state::Session;
use crate::lookup::{DefinitionLookup, FreeDictionaryLookup};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::fullscreen::{FullscreenBridge, NoopFullscreen, TerminalFullscreen};

/// TUI-specific presentation state (not part of core session logic)
pub struct TuiState {
    /// Where the card was last drawn, for click-to-flip
    pub card_area: Rect,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            card_area: Rect::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Restores the terminal when `run` exits, including early `?` returns.
struct TerminalRestoreGuard {
    restore: fn(),
}

impl TerminalRestoreGuard {
    fn new() -> Self {
        Self::with(ratatui::restore)
    }

    fn with(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Build the lookup backend from a resolved config.
pub fn build_lookup(config: &ResolvedConfig) -> Arc<dyn DefinitionLookup> {
    Arc::new(FreeDictionaryLookup::new(
        Some(config.dictionary_url.clone()),
        config.lookup_timeout,
    ))
}

fn build_fullscreen(config: &ResolvedConfig, tx: mpsc::Sender<Action>) -> Box<dyn FullscreenBridge> {
    if config.fullscreen_enabled {
        Box::new(TerminalFullscreen::new(stdout(), tx))
    } else {
        Box::new(NoopFullscreen)
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let lookup = build_lookup(&config);
    let mut session = Session::new();
    if config.start_playing {
        session.toggle_play();
    }
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut autoplay = Autoplay::new(config.autoplay_interval);
    let mut fullscreen = build_fullscreen(&config, tx.clone());

    let mut terminal = ratatui::init();
    let _restore_guard = TerminalRestoreGuard::new();
    let _terminal_mode_guard = TerminalModeGuard::new();

    spawn_deck_load(lookup, config.terms.clone(), tx.clone());

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        let animating = session.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &session, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(200)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::MouseClick(col, row) => {
                    if tui.card_area.contains(Position::new(col, row)) {
                        Some(Action::ToggleAnswer)
                    } else {
                        None
                    }
                }
                other => other.action(),
            };
            if let Some(action) = action {
                if dispatch(&mut session, action, &mut autoplay, fullscreen.as_mut(), &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        // Handle background task actions (deck ready, ticks, fullscreen)
        while !should_quit {
            let Ok(action) = rx.try_recv() else { break };
            needs_redraw = true;
            should_quit = dispatch(&mut session, action, &mut autoplay, fullscreen.as_mut(), &tx);
        }
    }

    autoplay.stop();
    if session.is_fullscreen() {
        if let Err(e) = fullscreen.exit() {
            warn!("Failed to leave fullscreen on exit: {}", e);
        }
    }

    Ok(())
}

/// Apply one action and carry out its effect. Returns true to quit.
fn dispatch(
    session: &mut Session,
    action: Action,
    autoplay: &mut Autoplay,
    fullscreen: &mut dyn FullscreenBridge,
    tx: &mpsc::Sender<Action>,
) -> bool {
    if !autoplay.accepts(&action) {
        debug!("Dropping stale {:?}", action);
        return false;
    }

    let effect = update(session, action);
    autoplay.sync(session.wants_autoplay(), tx);

    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::EnterFullscreen => {
            if let Err(e) = fullscreen.enter() {
                warn!("Fullscreen request failed: {}", e);
            }
        }
        Effect::ExitFullscreen => {
            if let Err(e) = fullscreen.exit() {
                warn!("Fullscreen exit failed: {}", e);
            }
        }
    }
    false
}

fn spawn_deck_load(lookup: Arc<dyn DefinitionLookup>, terms: Vec<String>, tx: mpsc::Sender<Action>) {
    info!("Spawning deck load for {} terms", terms.len());
    tokio::spawn(async move {
        let deck = load_deck(lookup.as_ref(), &terms).await;
        if tx.send(Action::DeckLoaded(deck)).is_err() {
            warn!("Failed to send loaded deck: receiver dropped");
        }
    });
}
