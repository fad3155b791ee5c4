//! # Core Session Logic
//!
//! Flashdeck's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Deck loader          │
//!                    │  • Autoplay timer       │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Lookup    │      │ Fullscreen │
//!     │  Adapter   │      │  (HTTP)    │      │  Bridge    │
//!     │ (ratatui)  │      │            │      │ (terminal) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Session` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`card`]: `Card`, `Deck` and the `CardView` read model
//! - [`loader`]: Concurrent deck loading with per-card fallbacks
//! - [`autoplay`]: The cancellable autoplay timer
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod autoplay;
pub mod card;
pub mod config;
pub mod loader;
pub mod state;
