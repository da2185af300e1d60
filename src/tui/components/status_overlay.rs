//! # Status Overlay
//!
//! The three non-list states a screen can be in: waiting for its query,
//! blocked on a mutation, or halted on a fetch error.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::centered_fixed;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

pub enum StatusOverlay {
    /// Query pending; fills the screen body.
    Loading { message: String, tick: usize },
    /// Mutation (or its re-fetch) pending; floats over the list.
    Processing { tick: usize },
    /// Query failed. There is no retry, only the keys in `hint`.
    Failed { message: String, hint: &'static str },
}

impl Component for StatusOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            StatusOverlay::Loading { message, tick } => {
                let [row] = Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .areas(area);
                let text = format!("{} {}", spinner_glyph(*tick), message);
                frame.render_widget(
                    Paragraph::new(text)
                        .alignment(Alignment::Center)
                        .style(Style::default().fg(Color::Cyan)),
                    row,
                );
            }
            StatusOverlay::Processing { tick } => {
                let overlay = centered_fixed(24, 3, area);
                frame.render_widget(Clear, overlay);
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow));
                frame.render_widget(
                    Paragraph::new(format!("{} Processing...", spinner_glyph(*tick)))
                        .alignment(Alignment::Center)
                        .block(block),
                    overlay,
                );
            }
            StatusOverlay::Failed { message, hint } => {
                let block = Block::bordered()
                    .title("ERROR")
                    .title_bottom(Line::from(*hint).centered())
                    .border_style(Style::default().fg(Color::Red));
                let [_, body] = Layout::vertical([Constraint::Percentage(40), Constraint::Min(0)])
                    .areas(block.inner(area));
                frame.render_widget(block, area);
                frame.render_widget(
                    Paragraph::new(message.as_str())
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true })
                        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                    body,
                );
            }
        }
    }
}

/// One-line message left behind by a failed mutation.
pub fn render_notice(frame: &mut Frame, area: Rect, notice: &str) {
    frame.render_widget(
        Paragraph::new(format!(" {notice}")).style(Style::default().fg(Color::Red)),
        area,
    );
}
