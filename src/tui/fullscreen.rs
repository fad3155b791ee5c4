//! # Fullscreen Bridge
//!
//! Asks the terminal emulator to go fullscreen and reports the change back
//! to the session as `Action::FullscreenChanged`.
//!
//! The request uses the XTWINOPS window operation `CSI 10 ; Ps t`
//! (`Ps = 1` enter, `Ps = 0` leave). Terminals that don't implement it
//! ignore the sequence, so an unsupported terminal degrades to a no-op.
//! The session never sets its own flag; it only mirrors the notification.
//!
//! Terminals give no way to query or subscribe to their fullscreen state,
//! so the notification is sent after our own request is written. A change
//! made outside the app (the emulator's own fullscreen key) is not
//! observed, and the next `F` press may only resync the flag.

use std::fmt;
use std::io::{self, Write};
use std::sync::mpsc;

use crossterm::{Command, execute};
use log::{debug, warn};

use crate::core::action::Action;

pub trait FullscreenBridge {
    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;
}

/// XTWINOPS full-screen toggle.
struct SetFullscreen(bool);

impl Command for SetFullscreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[10;{}t", u8::from(self.0))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        // No console API equivalent
        Ok(())
    }
}

/// Bridge backed by the terminal the TUI is drawn on.
pub struct TerminalFullscreen<W: Write> {
    out: W,
    notify: mpsc::Sender<Action>,
}

impl<W: Write> TerminalFullscreen<W> {
    pub fn new(out: W, notify: mpsc::Sender<Action>) -> Self {
        Self { out, notify }
    }

    fn request(&mut self, fullscreen: bool) -> io::Result<()> {
        execute!(self.out, SetFullscreen(fullscreen))?;
        debug!("Requested terminal fullscreen={}", fullscreen);
        // Delivered on the next pass of the event loop
        if self.notify.send(Action::FullscreenChanged(fullscreen)).is_err() {
            warn!("Fullscreen notification dropped: receiver gone");
        }
        Ok(())
    }
}

impl<W: Write> FullscreenBridge for TerminalFullscreen<W> {
    fn enter(&mut self) -> io::Result<()> {
        self.request(true)
    }

    fn exit(&mut self) -> io::Result<()> {
        self.request(false)
    }
}

/// Bridge for when fullscreen is disabled: requests go nowhere and no
/// change is ever reported.
pub struct NoopFullscreen;

impl FullscreenBridge for NoopFullscreen {
    fn enter(&mut self) -> io::Result<()> {
        debug!("Fullscreen disabled, ignoring enter request");
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        Ok(())
    }
}
