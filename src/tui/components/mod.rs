//! # TUI Components
//!
//! One component per phase of the session, plus the title bar.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: brand and status line
//! - `Intro`: the entrance
//! - `Spinner`: the reading in flight
//! - `Reveal`: the two drawn cards and their meanings
//! - `Clouded`: reading failure and crash recovery screens
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CardGrid`: the eight face-down cards, with a cursor in `CardGridState`
//!
//! Components receive external data as props, never by reaching into `App`.

pub mod card_grid;
pub mod clouded;
pub mod intro;
pub mod reveal;
pub mod spinner;
mod title_bar;

pub use card_grid::{CardGrid, CardGridEvent, CardGridState};
pub use clouded::Clouded;
pub use intro::Intro;
pub use reveal::Reveal;
pub use spinner::Spinner;
pub use title_bar::TitleBar;
