//! # Intro Component
//!
//! The entrance of the hall, shown until the user presses Enter.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

/// Sparkle frames cycled by the spinner clock.
const SPARKLES: [&str; 4] = ["✦", "✧", "✶", "✧"];

pub struct Intro {
    frame_index: usize,
}

impl Intro {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }
}

impl Component for Intro {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let sparkle = SPARKLES[(self.frame_index / 3) % SPARKLES.len()];
        let gold = Style::default().fg(Color::Yellow);

        let lines = vec![
            Line::from(Span::styled(sparkle, gold.add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled(
                "2026 Prophecy Hall",
                gold.add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "The stars align for the coming year. Enter the sacred space, draw two cards, \
                 and uncover the destiny that awaits your journey.",
                Style::default().fg(Color::LightBlue),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[ Enter Hall ]",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [column] = Layout::horizontal([Constraint::Max(72)])
            .flex(Flex::Center)
            .areas(area);
        let [body] = Layout::vertical([Constraint::Length(10)])
            .flex(Flex::Center)
            .areas(column);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, body);
    }
}
