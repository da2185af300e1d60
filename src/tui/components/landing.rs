//! # Landing Page Component
//!
//! The splash: animated logo, app name and version, shown until `Action::Ready`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::logo::Logo;

pub struct LandingPage {
    tick: usize,
}

impl LandingPage {
    pub fn new(tick: usize) -> Self {
        Self { tick }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text_lines = vec![
            Line::from(Span::styled(
                "Folio",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Authors & Books",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [logo_area, _, text_area] = Layout::vertical([
            Constraint::Length(Logo::required_height()),
            Constraint::Length(1),
            Constraint::Length(text_lines.len() as u16),
        ])
        .flex(Flex::Center)
        .areas(area);

        Logo::render(frame, logo_area, self.tick);
        frame.render_widget(
            Paragraph::new(text_lines).alignment(Alignment::Center),
            text_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_shows_name_and_version() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| LandingPage::new(0).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Folio"));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }
}
