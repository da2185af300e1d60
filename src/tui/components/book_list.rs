//! # BookList Component
//!
//! The author detail screen body: one card per book with its wrapped summary.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::books::BookScreen;
use crate::core::model::Book;
use crate::tui::component::Component;
use crate::tui::components::status_overlay::render_notice;

const HELP: &str = " a Add  e Edit  d Delete  Esc Back  q Quit ";

/// Borders (2) + horizontal padding (2) + summary indent (2).
const SUMMARY_OVERHEAD: u16 = 6;

pub struct BookList<'a> {
    screen: &'a BookScreen,
    list_state: &'a mut ListState,
}

impl<'a> BookList<'a> {
    pub fn new(screen: &'a BookScreen, list_state: &'a mut ListState) -> Self {
        Self { screen, list_state }
    }
}

fn book_item(book: &Book, width: u16) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        book.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    let width = usize::from(width.saturating_sub(SUMMARY_OVERHEAD).max(10));
    lines.extend(
        textwrap::wrap(&book.summary, width)
            .into_iter()
            .map(|line| Line::styled(format!("  {line}"), Style::default().fg(Color::Gray))),
    );
    lines.push(Line::styled(
        format!("  Published Year: {}", book.year),
        Style::default().fg(Color::Cyan),
    ));
    lines.push(Line::default());
    ListItem::new(lines)
}

impl Component for BookList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let notice = self.screen.listing.notice.as_deref();
        let [list_area, notice_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(u16::from(notice.is_some())),
        ])
        .areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Books by {} ", self.screen.author.name))
            .title_bottom(Line::from(HELP).centered())
            .padding(Padding::horizontal(1));

        let books = self.screen.listing.items();
        if books.is_empty() {
            self.list_state.select(None);
            frame.render_widget(
                Paragraph::new("No records found")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block),
                list_area,
            );
        } else {
            let items: Vec<ListItem> = books
                .iter()
                .map(|book| book_item(book, list_area.width))
                .collect();
            self.list_state.select(Some(self.screen.listing.selected));
            let list = List::new(items)
                .block(block)
                .highlight_symbol("▌")
                .highlight_style(Style::default().fg(Color::Yellow));
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
    use crate::core::model::AuthorRef;
    use crate::test_support::sample_books;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen() -> BookScreen {
        BookScreen::mount(AuthorRef {
            id: "a-1".to_string(),
            name: "Julio Cortázar".to_string(),
        })
    }

    fn render(screen: &BookScreen, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 20)).unwrap();
        let mut list_state = ListState::default();
        terminal
            .draw(|f| BookList::new(screen, &mut list_state).render(f, f.area()))
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
    fn test_renders_books_with_year() {
        let mut screen = screen();
        screen.receive(Ok(sample_books()));
        let text = render(&screen, 80);
        assert!(text.contains("Books by Julio Cortázar"));
        assert!(text.contains("Rayuela"));
        assert!(text.contains("Published Year: 1951"));
    }

    #[test]
    fn test_empty_list_shows_no_records() {
        let mut screen = screen();
        screen.receive(Ok(Vec::new()));
        assert!(render(&screen, 80).contains("No records found"));
    }

    #[test]
    fn test_long_summary_wraps() {
        let item = book_item(
            &Book {
                id: "b-9".to_string(),
                title: "Hopscotch".to_string(),
                summary: "word ".repeat(30),
                year: 1963,
                author_id: "a-1".to_string(),
            },
            40,
        );
        // Title, several summary lines, year, spacer.
        assert!(item.height() > 4);
    }
}
