//! # Clouded Views
//!
//! The two "vision has clouded" screens:
//! - `Clouded::reading_failed()` when the reading call fails (Error phase)
//! - `Clouded::disturbance()` when the render/dispatch boundary caught a panic
//!
//! Each offers exactly one recovery action bound to Enter.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct Clouded {
    message: &'static str,
    action: &'static str,
}

impl Clouded {
    pub fn reading_failed() -> Self {
        Self {
            message: "The cosmic energies were too turbulent for this specific alignment. \
                      Please try again.",
            action: "[Enter] Return to Entrance",
        }
    }

    pub fn disturbance() -> Self {
        Self {
            message: "A mystical disturbance interrupted the prophecy. \
                      The energies must be realigned.",
            action: "[Enter] Realign Energies",
        }
    }
}

impl Component for Clouded {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "The Vision has Clouded",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.message,
                Style::default().fg(Color::LightBlue),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.action,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ];

        let [column] = Layout::horizontal([Constraint::Max(56)])
            .flex(Flex::Center)
            .areas(area);
        let [body] = Layout::vertical([Constraint::Length(10)])
            .flex(Flex::Center)
            .areas(column);

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::Red))
            .padding(Padding::uniform(1));
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, body);
    }
}
