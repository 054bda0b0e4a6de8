//! # Reveal Component
//!
//! Shows the two drawn cards side by side: name, artwork reference and the
//! fixed meaning. A terminal cannot load the artwork itself, so the panel
//! prints its location; a reference that cannot be used falls back to the
//! "image unavailable" glyph without touching the session state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::catalog::Card;
use crate::reading::ReadingResult;
use crate::tui::component::Component;

/// Horizontal space consumed by borders (2) and padding (2).
const HORIZONTAL_OVERHEAD: u16 = 4;

/// What the artwork slot of a panel shows.
#[derive(Debug, PartialEq, Eq)]
pub enum Artwork<'a> {
    Image(&'a str),
    Unavailable,
}

impl<'a> Artwork<'a> {
    pub fn resolve(reference: &'a str) -> Self {
        let reference = reference.trim();
        if reference.is_empty() || reference.contains(char::is_whitespace) {
            Artwork::Unavailable
        } else {
            Artwork::Image(reference)
        }
    }

    fn line(&self) -> Line<'a> {
        match self {
            Artwork::Image(url) => Line::from(vec![
                Span::styled("▣ ", Style::default().fg(Color::Yellow)),
                Span::styled(*url, Style::default().fg(Color::DarkGray)),
            ]),
            Artwork::Unavailable => Line::from(Span::styled(
                "⚠ image unavailable",
                Style::default().fg(Color::Red),
            )),
        }
    }
}

pub struct Reveal<'a> {
    cards: &'a [&'static Card],
    reading: &'a ReadingResult,
}

impl<'a> Reveal<'a> {
    pub fn new(cards: &'a [&'static Card], reading: &'a ReadingResult) -> Self {
        Self { cards, reading }
    }

    fn panel<'p>(card: &Card, image: &'p str) -> Paragraph<'p> {
        let lines = vec![
            Line::from(Span::styled(
                card.name,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Artwork::resolve(image).line(),
            Line::from(""),
            Line::from(Span::styled(
                format!("\"{}\"", card.fixed_meaning),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::LightBlue))
            .title(format!(" {} ", card.theme))
            .padding(Padding::horizontal(1));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    /// Rendered height of a card panel at the given outer width, borders included.
    pub fn panel_height(card: &Card, image: &str, width: u16) -> u16 {
        let inner_width = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1);
        Self::panel(card, image).line_count(inner_width) as u16
    }
}

impl Component for Reveal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, panels_area, action_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "The Veil is Lifted",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            title_area,
        );

        let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(2)
            .split(panels_area);

        for (index, (card, column)) in self.cards.iter().zip(columns.iter()).enumerate() {
            let image = self.reading.image_for(index).unwrap_or_default();
            let height = Self::panel_height(card, image, column.width).min(column.height);
            let [panel] = Layout::vertical([Constraint::Length(height)])
                .flex(Flex::Start)
                .areas(*column);
            frame.render_widget(Self::panel(card, image), panel);
        }

        let action = Line::from(Span::styled(
            "[Enter] Seek a New Vision",
            Style::default().fg(Color::Yellow),
        ))
        .centered();
        frame.render_widget(action, action_area);
    }
}
