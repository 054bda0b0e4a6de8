//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! phase, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (intro sparkle, reading spinner): draws every ~80ms.
//! - **Idle** (selection, reveal, error): sleeps up to 500ms and only
//!   redraws on input or when a background action arrives.
//!
//! ## Safety Net
//!
//! Event handling, background pumping and rendering each run inside
//! `catch_unwind`. A panic replaces the whole view with the disturbance
//! screen, whose only action is a full reload of the session. The state
//! machine never sees it. The panic hook still runs ratatui's terminal
//! restore, so the loop re-enters raw mode after catching one.

mod component;
pub mod components;
pub mod event;
mod ui;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, enable_raw_mode};
use log::{debug, error, info};
use ratatui::DefaultTerminal;
use std::io::stdout;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::ServiceKind;
use crate::core::config::ResolvedConfig;
use crate::core::{Action, App, Effect, Phase};
use crate::dispatch::Dispatcher;
use crate::reading::{ReadingService, RemoteReadingService, StaticReadingService};
use crate::tui::component::EventHandler;
use crate::tui::components::{CardGridEvent, CardGridState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub card_grid: CardGridState,
    /// Set when the loop caught a panic; cleared by a reload.
    pub disturbed: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the reading service named by the resolved config.
pub fn build_service(config: &ResolvedConfig) -> Arc<dyn ReadingService> {
    match config.service {
        ServiceKind::Static => Arc::new(StaticReadingService::new()),
        ServiceKind::Remote => Arc::new(RemoteReadingService::new(
            config.api_key.clone(),
            config.remote_base_url.clone(),
        )),
    }
}

/// Route one input event. Returns true when the app should quit.
pub fn handle_event(dispatcher: &mut Dispatcher, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => {
            return dispatcher.dispatch(Action::Quit) == Effect::Quit;
        }
        TuiEvent::Resize => return false,
        _ => {}
    }

    if tui.disturbed {
        if event == TuiEvent::Submit {
            dispatcher.reload();
            *tui = TuiState::new();
        }
        return false;
    }

    if event == TuiEvent::Reset {
        dispatcher.dispatch(Action::Reset);
        tui.card_grid = CardGridState::new();
        return false;
    }

    match dispatcher.app().phase {
        Phase::Intro => {
            if event == TuiEvent::Submit {
                dispatcher.dispatch(Action::Enter);
            }
        }
        Phase::Selection => {
            if let Some(CardGridEvent::Toggle(id)) = tui.card_grid.handle_event(&event) {
                dispatcher.dispatch(Action::Toggle(id));
            }
        }
        Phase::Reveal | Phase::Error => {
            if event == TuiEvent::Submit {
                dispatcher.dispatch(Action::Reset);
                tui.card_grid = CardGridState::new();
            }
        }
        Phase::Fetching => {}
    }
    false
}

type PanicHook = dyn Fn(&panic::PanicHookInfo<'_>) + Sync + Send + 'static;

/// Logs every panic, then hands it to whatever hook was installed before
/// (ratatui's terminal restore among them). The previous hook comes back
/// on drop.
struct PanicHookGuard {
    previous: Arc<PanicHook>,
}

impl PanicHookGuard {
    fn install() -> Self {
        let previous: Arc<PanicHook> = Arc::from(panic::take_hook());
        let chained = Arc::clone(&previous);
        panic::set_hook(Box::new(move |info| {
            error!("Caught panic: {info}");
            chained(info);
        }));
        Self { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        let previous = Arc::clone(&self.previous);
        panic::set_hook(Box::new(move |info| previous(info)));
    }
}

/// The chained hook has already restored the terminal by the time a panic is
/// caught, so step back into raw mode and the alternate screen.
fn reenter_terminal(terminal: &mut DefaultTerminal) -> std::io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    terminal.clear()
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = build_service(&config);
    info!("Using {} reading service", service.name());
    let mut dispatcher = Dispatcher::new(
        App::new(config.advance_delay),
        service,
        config.reading_timeout,
    );
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _panic_hook = PanicHookGuard::install();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = !tui.disturbed
            && matches!(dispatcher.app().phase, Phase::Intro | Phase::Fetching);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let was_disturbed = tui.disturbed;
            let service_name = dispatcher.service_name().to_string();
            let app = dispatcher.app();
            terminal.draw(|f| {
                ui::render_guarded(f, &mut tui, |f, tui| {
                    ui::draw_ui(f, app, tui, &service_name, spinner_frame)
                });
            })?;
            if tui.disturbed && !was_disturbed {
                // The frame went to the screen the panic hook just left.
                reenter_terminal(&mut terminal)?;
            } else {
                needs_redraw = false;
            }
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match panic::catch_unwind(AssertUnwindSafe(|| {
                handle_event(&mut dispatcher, &mut tui, event)
            })) {
                Ok(quit) => should_quit |= quit,
                Err(_) => {
                    error!("Event handling panicked on {:?}", event);
                    tui.disturbed = true;
                    reenter_terminal(&mut terminal)?;
                }
            }
        }

        if should_quit {
            break;
        }

        // Timer and reading completions
        match panic::catch_unwind(AssertUnwindSafe(|| dispatcher.pump())) {
            Ok(0) => {}
            Ok(applied) => {
                debug!("Applied {applied} background action(s)");
                needs_redraw = true;
            }
            Err(_) => {
                error!("Background action panicked");
                tui.disturbed = true;
                needs_redraw = true;
                reenter_terminal(&mut terminal)?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_dispatcher;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_enter_then_draw_by_number() {
        let mut dispatcher = test_dispatcher();
        let mut tui = TuiState::new();

        handle_event(&mut dispatcher, &mut tui, TuiEvent::Submit);
        assert_eq!(dispatcher.app().phase, Phase::Selection);

        handle_event(&mut dispatcher, &mut tui, TuiEvent::CardKey(3));
        handle_event(&mut dispatcher, &mut tui, TuiEvent::Toggle);
        assert!(dispatcher.app().selection.is_empty());
        assert!(!dispatcher.has_pending());
    }

    #[tokio::test]
    async fn test_quit_from_any_phase() {
        let mut dispatcher = test_dispatcher();
        let mut tui = TuiState::new();
        assert!(handle_event(&mut dispatcher, &mut tui, TuiEvent::Quit));
        assert!(handle_event(&mut dispatcher, &mut tui, TuiEvent::ForceQuit));
    }

    #[tokio::test]
    async fn test_reset_key_returns_to_intro() {
        let mut dispatcher = test_dispatcher();
        let mut tui = TuiState::new();
        handle_event(&mut dispatcher, &mut tui, TuiEvent::Submit);
        handle_event(&mut dispatcher, &mut tui, TuiEvent::CardKey(1));
        handle_event(&mut dispatcher, &mut tui, TuiEvent::Reset);

        assert_eq!(dispatcher.app().phase, Phase::Intro);
        assert!(dispatcher.app().selection.is_empty());
        assert_eq!(tui.card_grid.cursor, 0);
    }

    #[tokio::test]
    async fn test_disturbed_only_accepts_reload() {
        let mut dispatcher = test_dispatcher();
        let mut tui = TuiState::new();
        handle_event(&mut dispatcher, &mut tui, TuiEvent::Submit);
        tui.disturbed = true;

        handle_event(&mut dispatcher, &mut tui, TuiEvent::CardKey(2));
        assert!(dispatcher.app().selection.is_empty());

        handle_event(&mut dispatcher, &mut tui, TuiEvent::Submit);
        assert!(!tui.disturbed);
        assert_eq!(dispatcher.app().phase, Phase::Intro);
    }

    #[test]
    fn test_build_service_follows_config() {
        let config = ResolvedConfig {
            service: ServiceKind::Remote,
            advance_delay: Duration::from_millis(1200),
            reading_timeout: Duration::from_secs(25),
            api_key: None,
            remote_base_url: "http://localhost:8787".to_string(),
        };
        assert_eq!(build_service(&config).name(), "remote");
    }

    fn is_marker_panic(info: &panic::PanicHookInfo<'_>) -> bool {
        let payload = info.payload();
        payload.downcast_ref::<&str>().copied() == Some("hook chain marker")
            || payload.downcast_ref::<String>().map(String::as_str) == Some("hook chain marker")
    }

    #[test]
    fn test_panic_guard_chains_and_restores_previous_hook() {
        static SEEN: AtomicUsize = AtomicUsize::new(0);

        let original = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            if is_marker_panic(info) {
                SEEN.fetch_add(1, Ordering::SeqCst);
            }
        }));

        {
            let _guard = PanicHookGuard::install();
            let _ = panic::catch_unwind(|| panic!("hook chain marker"));
            // ratatui's restore hook sits in this slot at runtime
            assert_eq!(SEEN.load(Ordering::SeqCst), 1);
        }

        let _ = panic::catch_unwind(|| panic!("hook chain marker"));
        assert_eq!(SEEN.load(Ordering::SeqCst), 2);

        panic::set_hook(original);
    }
}
