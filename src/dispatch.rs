//! # Dispatcher
//!
//! Owns the `App` and carries out the effects `update()` returns.
//!
//! Timers and reading calls run as tokio tasks and report back as
//! `Action`s over an unbounded channel. The event loop drains that channel
//! on its own thread, so every state change still happens in one place.
//!
//! ```text
//! UI event ──► dispatch(action) ──► update() ──► Effect
//!                   ▲                              │
//!                   │      ScheduleAdvance ────────┤ tokio::time::sleep
//!                   │      StartReading ───────────┤ service.fetch_reading
//!                   └──── Action channel ◄─────────┘
//! ```
//!
//! `CancelPending` aborts outstanding tasks. Anything that slips past the
//! abort is still rejected by the generation check in `update()`.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::AbortHandle;

use crate::core::catalog::Card;
use crate::core::{Action, App, Effect, update};
use crate::reading::{ReadingError, ReadingService};

pub struct Dispatcher {
    app: App,
    service: Arc<dyn ReadingService>,
    reading_timeout: Duration,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
    pending: Vec<AbortHandle>,
}

impl Dispatcher {
    pub fn new(app: App, service: Arc<dyn ReadingService>, reading_timeout: Duration) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            app,
            service,
            reading_timeout,
            tx,
            rx,
            pending: Vec::new(),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn service_name(&self) -> &str {
        self.service.name()
    }

    /// True while a timer or reading task is still running.
    pub fn has_pending(&self) -> bool {
        self.pending.iter().any(|handle| !handle.is_finished())
    }

    /// Apply an action and run the resulting effect. The effect is returned
    /// so the caller can react to `Quit`.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        debug!("Dispatching {:?}", action);
        let effect = update(&mut self.app, action);
        self.run_effect(&effect);
        effect
    }

    /// Apply every action the background tasks have sent so far.
    /// Returns the number of actions applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next background action and apply it.
    pub async fn step(&mut self) -> Option<Effect> {
        let action = self.rx.recv().await?;
        Some(self.dispatch(action))
    }

    /// Throw the whole session away and start over from the intro.
    pub fn reload(&mut self) {
        self.cancel_pending();
        while self.rx.try_recv().is_ok() {}
        self.app = App::new(self.app.advance_delay);
        info!("Session reloaded");
    }

    fn run_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::ScheduleAdvance { generation, delay } => {
                self.cancel_pending();
                let handle = self.spawn_advance(*generation, *delay);
                self.pending.push(handle);
            }
            Effect::StartReading {
                generation,
                first,
                second,
            } => {
                self.pending.retain(|handle| !handle.is_finished());
                let handle = self.spawn_reading(*generation, *first, *second);
                self.pending.push(handle);
            }
            Effect::CancelPending => self.cancel_pending(),
            Effect::None | Effect::Quit => {}
        }
    }

    fn cancel_pending(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }

    fn spawn_advance(&self, generation: u64, delay: Duration) -> AbortHandle {
        debug!("Scheduling advance in {:?} (generation {generation})", delay);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Action::AdvanceElapsed { generation }).is_err() {
                warn!("Failed to send advance: receiver dropped");
            }
        })
        .abort_handle()
    }

    fn spawn_reading(
        &self,
        generation: u64,
        first: &'static Card,
        second: &'static Card,
    ) -> AbortHandle {
        info!(
            "Spawning reading via {} service (generation {generation})",
            self.service.name()
        );
        let service = self.service.clone();
        let timeout = self.reading_timeout;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = tokio::time::timeout(timeout, service.fetch_reading(first, second))
                .await
                .unwrap_or(Err(ReadingError::Timeout));

            let action = match outcome {
                Ok(result) => Action::ReadingReady { generation, result },
                Err(e) => {
                    warn!("Reading service error: {e}");
                    Action::ReadingFailed {
                        generation,
                        error: e.to_string(),
                    }
                }
            };
            if tx.send(action).is_err() {
                warn!("Failed to send reading outcome: receiver dropped");
            }
        })
        .abort_handle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use crate::test_support::{FailingService, test_dispatcher};

    #[tokio::test(start_paused = true)]
    async fn test_failing_service_moves_to_error() {
        let mut dispatcher = Dispatcher::new(
            App::default(),
            Arc::new(FailingService),
            Duration::from_secs(25),
        );
        dispatcher.dispatch(Action::Enter);
        dispatcher.dispatch(Action::Toggle(1));
        dispatcher.dispatch(Action::Toggle(2));

        dispatcher.step().await;
        assert_eq!(dispatcher.app().phase, Phase::Fetching);
        dispatcher.step().await;
        assert_eq!(dispatcher.app().phase, Phase::Error);
        assert!(dispatcher.app().reading.is_none());
        assert!(
            dispatcher
                .app()
                .last_error
                .as_deref()
                .is_some_and(|e| e.contains("connection refused"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reload_discards_session() {
        let mut dispatcher = test_dispatcher();
        dispatcher.dispatch(Action::Enter);
        dispatcher.dispatch(Action::Toggle(1));
        dispatcher.dispatch(Action::Toggle(2));
        assert!(dispatcher.has_pending());

        dispatcher.reload();
        assert!(!dispatcher.has_pending());
        assert_eq!(dispatcher.app().phase, Phase::Intro);
        assert!(dispatcher.app().selection.is_empty());
    }

    #[tokio::test]
    async fn test_pump_without_background_work() {
        let mut dispatcher = test_dispatcher();
        assert_eq!(dispatcher.pump(), 0);
        assert_eq!(dispatcher.service_name(), "static");
    }
}
