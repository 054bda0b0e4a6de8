//! # TitleBar Component
//!
//! Top line of the hall: the brand on the left, the session status on the
//! right. Stateless; all data arrives as props.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub status_message: &'a str,
    pub service_name: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(status_message: &'a str, service_name: &'a str) -> Self {
        Self {
            status_message,
            service_name,
        }
    }

    fn status_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("[{}]", self.service_name)
        } else {
            format!("{} | [{}]", self.status_message, self.service_name)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [brand_area, status_area] =
            Layout::horizontal([Constraint::Length(16), Constraint::Min(0)]).areas(area);

        let brand = Span::styled(
            "2026 Prophecy",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Line::from(brand), brand_area);

        let status = Line::from(Span::styled(
            self.status_text(),
            Style::default().fg(Color::DarkGray),
        ))
        .right_aligned();
        frame.render_widget(status, status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_without_message() {
        let bar = TitleBar::new("", "static");
        assert_eq!(bar.status_text(), "[static]");
    }

    #[test]
    fn test_status_text_with_message() {
        let bar = TitleBar::new("Select two cards", "remote");
        assert_eq!(bar.status_text(), "Select two cards | [remote]");
    }
}
