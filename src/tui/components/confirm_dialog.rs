//! # ConfirmDialog Component
//!
//! Delete confirmation. Nothing is sent until the user answers `y`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::centered_fixed;

const HELP: &str = " y Delete  n Cancel ";

pub struct ConfirmDialog {
    /// "author" or "book".
    pub entity: &'static str,
    /// Name of the row being deleted.
    pub subject: String,
}

impl ConfirmDialog {
    pub fn new(entity: &'static str, subject: String) -> Self {
        Self { entity, subject }
    }
}

impl Component for ConfirmDialog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_fixed(52, 7, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Delete ")
            .title_bottom(Line::from(HELP).centered())
            .padding(Padding::uniform(1));

        let lines = vec![
            Line::from(format!(
                "Are you sure you want to delete this {}?",
                self.entity
            )),
            Line::styled(
                self.subject.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            overlay,
        );
    }
}
