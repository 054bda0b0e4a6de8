//! # Actions
//!
//! Everything that can happen in the hall becomes an `Action`.
//! User presses Enter on the intro? That's `Action::Enter`.
//! The reading comes back? That's `Action::ReadingReady { .. }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the runtime must carry out. No I/O happens here: timers and the
//! reading call are described by effects and executed by the dispatcher.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Timer and reading completions carry the generation they were issued
//! for. A completion whose generation no longer matches is stale (the user
//! reset, or un-completed the pair) and is dropped.

use std::time::Duration;

use log::{debug, info, warn};

use crate::core::catalog::{self, Card, CardId};
use crate::core::selection::Toggle;
use crate::core::state::{App, Phase};
use crate::reading::ReadingResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leave the intro and start choosing cards.
    Enter,
    /// Select or deselect a card.
    Toggle(CardId),
    /// The advance timer scheduled for `generation` fired.
    AdvanceElapsed { generation: u64 },
    ReadingReady { generation: u64, result: ReadingResult },
    ReadingFailed { generation: u64, error: String },
    /// Back to the intro with an empty hand.
    Reset,
    Quit,
}

/// Work the runtime must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Send `AdvanceElapsed { generation }` after `delay`.
    ScheduleAdvance { generation: u64, delay: Duration },
    /// Call the reading service for the pair, in this order.
    StartReading {
        generation: u64,
        first: &'static Card,
        second: &'static Card,
    },
    /// Abort any outstanding timer or reading task.
    CancelPending,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Enter => {
            if app.phase != Phase::Intro {
                return Effect::None;
            }
            app.phase = Phase::Selection;
            app.status_message = "Select two cards".to_string();
            info!("Entered the hall");
            Effect::None
        }

        Action::Toggle(id) => toggle(app, id),

        Action::AdvanceElapsed { generation } => {
            if !app.is_current(generation, Phase::Selection) {
                debug!("Dropping stale advance (generation {generation})");
                return Effect::None;
            }
            let Some((first, second)) = app.selection.pair() else {
                debug!("Advance fired without a complete pair");
                return Effect::None;
            };
            app.phase = Phase::Fetching;
            app.status_message = "Reading the stars...".to_string();
            info!("Fetching reading for {} + {}", first.name, second.name);
            Effect::StartReading {
                generation,
                first,
                second,
            }
        }

        Action::ReadingReady { generation, result } => {
            if !app.is_current(generation, Phase::Fetching) {
                debug!("Dropping stale reading (generation {generation})");
                return Effect::None;
            }
            app.reading = Some(result);
            app.phase = Phase::Reveal;
            app.status_message = "The veil is lifted".to_string();
            info!("Reading revealed");
            Effect::None
        }

        Action::ReadingFailed { generation, error } => {
            if !app.is_current(generation, Phase::Fetching) {
                debug!("Dropping stale reading failure (generation {generation}): {error}");
                return Effect::None;
            }
            warn!("Reading failed: {error}");
            app.phase = Phase::Error;
            app.status_message = "The vision has clouded".to_string();
            app.last_error = Some(error);
            Effect::None
        }

        Action::Reset => {
            app.selection.clear();
            app.reading = None;
            app.last_error = None;
            app.phase = Phase::Intro;
            app.status_message.clear();
            let generation = app.next_generation();
            info!("Session reset (generation {generation})");
            Effect::CancelPending
        }

        Action::Quit => Effect::Quit,
    }
}

fn toggle(app: &mut App, id: CardId) -> Effect {
    if app.phase != Phase::Selection {
        return Effect::None;
    }
    if catalog::find(id).is_none() {
        debug!("Ignoring toggle of unknown card {id}");
        return Effect::None;
    }

    let was_complete = app.selection.is_complete();
    match app.selection.toggle(id) {
        Toggle::Rejected => Effect::None,
        Toggle::Added if app.selection.is_complete() => {
            let generation = app.next_generation();
            app.status_message = "The cards are chosen".to_string();
            Effect::ScheduleAdvance {
                generation,
                delay: app.advance_delay,
            }
        }
        Toggle::Removed if was_complete => {
            // The pending advance no longer applies.
            app.next_generation();
            app.status_message = "Select two cards".to_string();
            Effect::CancelPending
        }
        Toggle::Added | Toggle::Removed => Effect::None,
    }
}
