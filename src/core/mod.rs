//! # Core Application Logic
//!
//! This module contains the hall's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (8 cards)    │
//!                    │  • Selection (≤ 2 ids)  │
//!                    │  • State (App, Phase)   │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │ Dispatcher │            │    TUI     │
//!             │  (timers,  │            │  Adapter   │
//!             │  readings) │            │ (ratatui)  │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The fixed card library
//! - [`selection`]: The ordered pair being drawn
//! - [`state`]: The `App` struct and its `Phase`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings with defaults → file → env → CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod selection;
pub mod state;

pub use action::{Action, Effect, update};
pub use state::{App, Phase};
