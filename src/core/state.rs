//! # Application State
//!
//! Core session state for the hall. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── phase: Phase                   // Intro / Selection / Fetching / Reveal / Error
//! ├── selection: Selection           // up to two card ids, click order
//! ├── reading: Option<ReadingResult> // set only on a successful fetch
//! ├── generation: u64                // identifies the scheduled work in flight
//! ├── advance_delay: Duration        // pause before Selection → Fetching
//! ├── status_message: String         // status bar text
//! └── last_error: Option<String>     // why the vision clouded
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;
use std::time::Duration;

use crate::core::selection::Selection;
use crate::reading::ReadingResult;

/// Pause between completing the pair and starting the reading.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1200);

/// The single active phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Intro,
    Selection,
    Fetching,
    Reveal,
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Intro => "INTRO",
            Phase::Selection => "SELECTION",
            Phase::Fetching => "FETCHING",
            Phase::Reveal => "REVEAL",
            Phase::Error => "ERROR",
        };
        f.write_str(name)
    }
}

pub struct App {
    pub phase: Phase,
    pub selection: Selection,
    pub reading: Option<ReadingResult>,
    /// Bumped whenever pending timers or readings become stale.
    pub generation: u64,
    pub advance_delay: Duration,
    pub status_message: String,
    pub last_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE_DELAY)
    }
}

impl App {
    pub fn new(advance_delay: Duration) -> Self {
        Self {
            phase: Phase::Intro,
            selection: Selection::new(),
            reading: None,
            generation: 0,
            advance_delay,
            status_message: String::new(),
            last_error: None,
        }
    }

    /// Invalidate everything scheduled so far and return the new generation.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// True iff a completion stamped with `generation` still belongs to
    /// this session in the given phase.
    pub fn is_current(&self, generation: u64, phase: Phase) -> bool {
        self.generation == generation && self.phase == phase
    }
}
