//! # Core Session Logic
//!
//! Everything about the interactive session that does not depend on a
//! terminal. It knows nothing about ratatui or crossterm.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (state)      │
//!                    │  • Action (key events)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Dispatch
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │  Dispatcher             │──→ AutomationProvider
//!                    │  + ProgressReporter     │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Session` struct — all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`dispatch`]: Parses collected input and drives the provider
//! - [`progress`]: Ticks while a smooth move is in flight
//! - [`validate`]: Screen-bounds checks for coordinates
//! - [`config`]: Layered settings (file, env, CLI)

pub mod action;
pub mod config;
pub mod dispatch;
pub mod progress;
pub mod state;
pub mod validate;
