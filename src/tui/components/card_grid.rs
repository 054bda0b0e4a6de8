//! # Card Grid Component
//!
//! The selection table: eight face-down cards in two rows of four.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardGridState` lives in `TuiState` and owns the cursor
//! - `CardGrid` is created each frame with borrowed state and the selection
//!
//! Once two cards are chosen, the others are drawn dimmed and the cursor
//! can no longer toggle them. Chosen cards stay live so they can be put back.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::catalog::{self, Card, CardId};
use crate::core::selection::Selection;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const COLUMNS: usize = 4;

/// Persistent cursor state for the grid.
#[derive(Debug, Default)]
pub struct CardGridState {
    pub cursor: usize,
}

/// Events emitted by the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardGridEvent {
    Toggle(CardId),
}

impl CardGridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The card under the cursor.
    pub fn current(&self) -> Option<&'static Card> {
        catalog::all().get(self.cursor)
    }

    fn move_by(&mut self, delta: isize) {
        let len = catalog::all().len() as isize;
        let next = self.cursor as isize + delta;
        if (0..len).contains(&next) {
            self.cursor = next as usize;
        }
    }
}

impl EventHandler for CardGridState {
    type Event = CardGridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CardGridEvent> {
        match event {
            TuiEvent::CursorLeft => self.move_by(-1),
            TuiEvent::CursorRight => self.move_by(1),
            TuiEvent::CursorUp => self.move_by(-(COLUMNS as isize)),
            TuiEvent::CursorDown => self.move_by(COLUMNS as isize),
            TuiEvent::Toggle | TuiEvent::Submit => {
                return self.current().map(|card| CardGridEvent::Toggle(card.id));
            }
            TuiEvent::CardKey(id) => {
                let index = catalog::all().iter().position(|card| card.id == *id)?;
                self.cursor = index;
                return Some(CardGridEvent::Toggle(*id));
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the grid.
pub struct CardGrid<'a> {
    state: &'a CardGridState,
    selection: &'a Selection,
}

impl<'a> CardGrid<'a> {
    pub fn new(state: &'a CardGridState, selection: &'a Selection) -> Self {
        Self { state, selection }
    }

    fn card_style(&self, card: &Card) -> (Style, BorderType) {
        if self.selection.contains(card.id) {
            (
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                BorderType::Double,
            )
        } else if self.selection.is_disabled(card.id) {
            (
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                BorderType::Plain,
            )
        } else {
            (Style::default().fg(Color::LightBlue), BorderType::Rounded)
        }
    }

    fn card_lines(&self, card: &Card) -> Vec<Line<'static>> {
        let order = self
            .selection
            .ids()
            .iter()
            .position(|&id| id == card.id);
        let marker = match order {
            Some(0) => "✦ first",
            Some(_) => "✦ second",
            None => "",
        };
        vec![
            Line::from(""),
            Line::from("☾ ✧ ☽"),
            Line::from(""),
            Line::from(Span::styled(marker, Style::default().fg(Color::Yellow))),
        ]
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, index: usize, card: &Card) {
        let (style, border_type) = self.card_style(card);
        let title_style = if index == self.state.cursor {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };

        let block = Block::bordered()
            .border_type(border_type)
            .border_style(style)
            .title(Line::from(Span::styled(format!(" {} ", card.id), title_style)).centered());

        let face = Paragraph::new(self.card_lines(card))
            .alignment(Alignment::Center)
            .style(style)
            .block(block);
        frame.render_widget(face, area);
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, grid_area, hint_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let mut header = vec![
            Line::from(Span::styled(
                "Select Two Cards",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Listen to your intuition.",
                Style::default().fg(Color::LightBlue),
            )),
        ];
        if !self.selection.is_complete() {
            header.push(Line::from(Span::styled(
                "Follow the pull of the celestial energies.",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM),
            )));
        }
        frame.render_widget(
            Paragraph::new(header).alignment(Alignment::Center),
            header_area,
        );

        let cards = catalog::all();
        let rows = cards.len().div_ceil(COLUMNS);
        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(grid_area);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let index = row * COLUMNS + col;
                if let Some(card) = cards.get(index) {
                    self.render_card(frame, *cell, index, card);
                }
            }
        }

        let hint = Line::from(Span::styled(
            "←↑↓→ move  Space/Enter draw  1-8 draw by number  r reset  q quit",
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(hint, hint_area);
    }
}
