//! # AuthorList Component
//!
//! Search box on top, filtered authors below, failed-mutation notice at the
//! bottom. Follows the persistent state + transient wrapper pattern: the
//! `ListState` lives in `TuiState`, `AuthorList` is built each frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::authors::AuthorScreen;
use crate::tui::component::Component;
use crate::tui::components::search_box::SearchBox;
use crate::tui::components::status_overlay::render_notice;

const HELP: &str = " / Search  a Add  e Edit  d Delete  Enter Books  q Quit ";

pub struct AuthorList<'a> {
    screen: &'a AuthorScreen,
    search: &'a SearchBox,
    list_state: &'a mut ListState,
}

impl<'a> AuthorList<'a> {
    pub fn new(screen: &'a AuthorScreen, search: &'a SearchBox, list_state: &'a mut ListState) -> Self {
        Self {
            screen,
            search,
            list_state,
        }
    }

    fn empty_message(&self) -> String {
        if self.screen.search.is_empty() {
            "No records found".to_string()
        } else {
            format!("No authors match \"{}\"", self.screen.search)
        }
    }
}

impl Component for AuthorList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let notice = self.screen.listing.notice.as_deref();
        let [search_area, list_area, notice_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(u16::from(notice.is_some())),
        ])
        .areas(area);

        self.search.render(frame, search_area, &self.screen.search);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Authors ({}) ", self.screen.filtered.len()))
            .title_bottom(Line::from(HELP).centered())
            .padding(Padding::horizontal(1));

        if self.screen.filtered.is_empty() {
            self.list_state.select(None);
            frame.render_widget(
                Paragraph::new(self.empty_message())
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block),
                list_area,
            );
        } else {
            let items: Vec<ListItem> = self
                .screen
                .filtered
                .iter()
                .map(|author| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            author.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {} · {}", author.nationality, author.genre),
                            Style::default().fg(Color::Gray),
                        ),
                    ]))
                })
                .collect();

            // Search mode keeps the highlight dim so focus reads as "in the box".
            let highlight = if self.search.is_focused() {
                Style::default().add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().add_modifier(Modifier::REVERSED)
            };
            self.list_state.select(Some(self.screen.listing.selected));
            let list = List::new(items).block(block).highlight_style(highlight);
            frame.render_stateful_widget(list, list_area, &mut *self.list_state);
        }

        if let Some(notice) = notice {
            render_notice(frame, notice_area, notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::TextEdit;
    use crate::test_support::sample_authors;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(screen: &AuthorScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        let search = SearchBox::new();
        let mut list_state = ListState::default();
        terminal
            .draw(|f| AuthorList::new(screen, &search, &mut list_state).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_filtered_authors() {
        let mut screen = AuthorScreen::new();
        screen.receive(Ok(sample_authors()));
        screen.edit_search(&TextEdit::Paste("lispector".to_string()));
        let text = render(&screen);
        assert!(text.contains("Clarice Lispector"));
        assert!(!text.contains("Cortázar"));
        assert!(text.contains("Authors (1)"));
    }

    #[test]
    fn test_empty_search_result_state() {
        let mut screen = AuthorScreen::new();
        screen.receive(Ok(sample_authors()));
        screen.edit_search(&TextEdit::Paste("zzz".to_string()));
        assert!(render(&screen).contains("No authors match \"zzz\""));
    }

    #[test]
    fn test_empty_catalog_state() {
        let mut screen = AuthorScreen::new();
        screen.receive(Ok(Vec::new()));
        assert!(render(&screen).contains("No records found"));
    }

    #[test]
    fn test_notice_is_shown() {
        let mut screen = AuthorScreen::new();
        screen.receive(Ok(sample_authors()));
        screen.listing.notice = Some("Error processing request. Please try again.".to_string());
        assert!(render(&screen).contains("Error processing request"));
    }
}
