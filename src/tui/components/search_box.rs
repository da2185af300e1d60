//! # SearchBox Component
//!
//! The name filter above the author list. The search text itself is core
//! state (`AuthorScreen::search`); this component only owns the input mode and
//! turns keystrokes into edits while the box has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use crate::core::form::TextEdit;
use crate::tui::component::EventHandler;
use crate::tui::components::text_columns;
use crate::tui::event::TuiEvent;
use crate::tui::keymap::InputMode;

const PLACEHOLDER: &str = "Search authors...";

/// High-level events emitted while the search box has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Edit(TextEdit),
    SelectNext,
    SelectPrevious,
    /// Focus left the box (Enter or Esc).
    Done,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    pub mode: InputMode,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.mode == InputMode::Search
    }

    /// Draws the box with `text`, placing the terminal cursor after it when
    /// focused.
    pub fn render(&self, frame: &mut Frame, area: Rect, text: &str) {
        let border = if self.is_focused() {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(" / Search ");

        let paragraph = if text.is_empty() && !self.is_focused() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(text)
        };
        frame.render_widget(paragraph.block(block), area);

        if self.is_focused() {
            let max_x = area.x + area.width.saturating_sub(2);
            let cursor_x = area
                .x
                .saturating_add(1)
                .saturating_add(text_columns(text))
                .min(max_x);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::Submit => {
                self.mode = InputMode::Browse;
                Some(SearchEvent::Done)
            }
            TuiEvent::CursorDown => Some(SearchEvent::SelectNext),
            TuiEvent::CursorUp => Some(SearchEvent::SelectPrevious),
            TuiEvent::InputChar(c) => Some(SearchEvent::Edit(TextEdit::Insert(*c))),
            TuiEvent::Paste(text) => Some(SearchEvent::Edit(TextEdit::Paste(text.clone()))),
            TuiEvent::Backspace => Some(SearchEvent::Edit(TextEdit::Backspace)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_edits() {
        let mut search = SearchBox {
            mode: InputMode::Search,
        };
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('j')),
            Some(SearchEvent::Edit(TextEdit::Insert('j')))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Edit(TextEdit::Backspace))
        );
        assert!(search.is_focused());
    }

    #[test]
    fn test_enter_leaves_search() {
        let mut search = SearchBox {
            mode: InputMode::Search,
        };
        assert_eq!(search.handle_event(&TuiEvent::Submit), Some(SearchEvent::Done));
        assert_eq!(search.mode, InputMode::Browse);
    }

    #[test]
    fn test_cursor_clamped_for_very_long_text() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let search = SearchBox {
            mode: InputMode::Search,
        };
        let text = "w".repeat(70_000);
        terminal
            .draw(|f| search.render(f, f.area(), &text))
            .unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!((cursor.x, cursor.y), (38, 1));
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let search = SearchBox::new();
        terminal
            .draw(|f| search.render(f, f.area(), ""))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains(PLACEHOLDER));
    }
}
