//! # Autoplay Timer
//!
//! A cancellable periodic task that sends `Action::AutoplayTick` into the
//! event loop's channel.
//!
//! ```text
//!            sync(true)
//!   Idle ─────────────────► Running(generation)
//!    ▲                           │
//!    └───────────────────────────┘
//!      sync(false) / stop() / drop
//! ```
//!
//! The event loop calls `sync(session.wants_autoplay(), ..)` after every
//! update, so the timer follows `is_playing` and the deck size without the
//! session knowing the timer exists. Manual navigation never restarts it.

use std::sync::mpsc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::core::action::Action;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

pub struct Autoplay {
    interval: Duration,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Run counter; bumped every time the timer starts.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts or stops the timer so that it runs iff `should_run`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn sync(&mut self, should_run: bool, sender: &mpsc::Sender<Action>) {
        match (should_run, self.is_running()) {
            (true, false) => self.start(sender.clone()),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    /// False for ticks left over from a previous run; true for everything else.
    pub fn accepts(&self, action: &Action) -> bool {
        match action {
            Action::AutoplayTick(generation) => {
                self.is_running() && *generation == self.generation
            }
            _ => true,
        }
    }

    fn start(&mut self, sender: mpsc::Sender<Action>) {
        self.generation += 1;
        let generation = self.generation;
        let period = self.interval;
        // First tick one full period from now, not immediately
        let first = Instant::now() + period;

        info!("Autoplay started (run {}, every {:?})", generation, period);
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if sender.send(Action::AutoplayTick(generation)).is_err() {
                    warn!("Autoplay tick dropped: receiver gone, stopping run {}", generation);
                    return;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Autoplay stopped (run {})", self.generation);
        }
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}
