use log::error;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Clear;
use std::panic::{self, AssertUnwindSafe};

use crate::core::{App, Phase};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardGrid, Clouded, Intro, Reveal, Spinner, TitleBar};

/// Split the frame into title bar and main area.
fn frame_areas(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area)
}

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    service_name: &str,
    spinner_frame: usize,
) {
    let [title_area, main_area] = frame_areas(frame.area());

    TitleBar::new(&app.status_message, service_name).render(frame, title_area);

    match app.phase {
        Phase::Intro => Intro::new(spinner_frame).render(frame, main_area),
        Phase::Selection => {
            CardGrid::new(&tui.card_grid, &app.selection).render(frame, main_area)
        }
        Phase::Fetching => Spinner::new(spinner_frame).render(frame, main_area),
        Phase::Reveal => {
            let cards = app.selection.cards();
            // Nothing to reveal without the result and the pair.
            if let Some(reading) = &app.reading
                && cards.len() == 2
            {
                Reveal::new(&cards, reading).render(frame, main_area);
            }
        }
        Phase::Error => Clouded::reading_failed().render(frame, main_area),
    }
}

/// Full-screen recovery view shown after the loop caught a panic.
pub fn draw_disturbance(frame: &mut Frame) {
    let area = frame.area();
    Clouded::disturbance().render(frame, area);
}

/// Run `render` inside the panic boundary. A panic marks the session as
/// disturbed and the same frame is repainted with the disturbance screen.
pub fn render_guarded<F>(frame: &mut Frame, tui: &mut TuiState, render: F)
where
    F: FnOnce(&mut Frame, &mut TuiState),
{
    if !tui.disturbed {
        let rendered = panic::catch_unwind(AssertUnwindSafe(|| render(frame, tui)));
        if rendered.is_ok() {
            return;
        }
        error!("Render panicked; showing disturbance screen");
        tui.disturbed = true;
    }
    let area = frame.area();
    frame.render_widget(Clear, area);
    draw_disturbance(frame);
}
