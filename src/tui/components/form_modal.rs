//! # FormModal Component
//!
//! The add/edit overlay shared by both screens. The core forms are flattened
//! into a list of `FieldView`s so one renderer serves the single form-level
//! error of the author form and the per-field errors of the book form.
//!
//! ```text
//! ┌ Add New Book ───────────────────────┐
//! │ ╭ Book Title ─────────────────────╮ │
//! │ │ The Left Hand of Darkness       │ │
//! │ ╰─────────────────────────────────╯ │
//! │   Title is required.                │
//! │   ...                               │
//! │            [ Add Book ]             │
//! └ Tab Next  Enter Submit  Esc Cancel ─┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::form::{AuthorField, AuthorForm, BookField, BookForm, FormMode};
use crate::tui::component::Component;
use crate::tui::components::{centered_fixed, text_columns};

const HELP: &str = " Tab Next  Enter Submit  Esc Cancel ";
const FIELD_HEIGHT: u16 = 3;
const MODAL_WIDTH: u16 = 60;

struct FieldView<'a> {
    label: &'static str,
    value: &'a str,
    error: Option<&'a str>,
    focused: bool,
}

pub struct FormModal<'a> {
    title: &'static str,
    submit_label: &'static str,
    fields: Vec<FieldView<'a>>,
    form_error: Option<&'a str>,
}

impl<'a> FormModal<'a> {
    pub fn author(form: &'a AuthorForm) -> Self {
        let focused = form.focused_field();
        Self {
            title: form.title(),
            submit_label: match form.mode {
                FormMode::Create => "Add Author",
                FormMode::Edit { .. } => "Update Author",
            },
            fields: AuthorField::ALL
                .into_iter()
                .map(|field| FieldView {
                    label: field.placeholder(),
                    value: form.value(field),
                    error: None,
                    focused: field == focused,
                })
                .collect(),
            form_error: form.error.as_deref(),
        }
    }

    pub fn book(form: &'a BookForm) -> Self {
        let focused = form.focused_field();
        Self {
            title: form.title_text(),
            submit_label: form.submit_label(),
            fields: BookField::ALL
                .into_iter()
                .map(|field| FieldView {
                    label: field.placeholder(),
                    value: form.value(field),
                    error: form.errors.for_field(field),
                    focused: field == focused,
                })
                .collect(),
            form_error: None,
        }
    }

    fn height(&self) -> u16 {
        let fields: u16 = self
            .fields
            .iter()
            .map(|f| FIELD_HEIGHT + u16::from(f.error.is_some()))
            .sum();
        // Borders, form error, blank line, button.
        fields + 2 + u16::from(self.form_error.is_some()) + 2
    }
}

/// The longest suffix of `text` that fits in `width` columns, so the end of a
/// long value (where typing happens) stays visible.
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[index + c.len_utf8()..];
        }
    }
    text
}

impl Component for FormModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_fixed(MODAL_WIDTH, self.height(), area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", self.title))
            .title_bottom(Line::from(HELP).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let mut constraints: Vec<Constraint> = Vec::new();
        for field in &self.fields {
            constraints.push(Constraint::Length(FIELD_HEIGHT));
            if field.error.is_some() {
                constraints.push(Constraint::Length(1));
            }
        }
        if self.form_error.is_some() {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints).split(inner);

        let error_style = Style::default().fg(Color::Red);
        let mut row = 0;
        let mut cursor = None;
        for field in &self.fields {
            let field_area = rows[row];
            row += 1;

            let border = if field.focused {
                Color::Yellow
            } else if field.error.is_some() {
                Color::Red
            } else {
                Color::DarkGray
            };
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", field.label));
            let text_width = usize::from(field_area.width.saturating_sub(3));
            let shown = visible_tail(field.value, text_width);
            let paragraph = if field.value.is_empty() {
                Paragraph::new(field.label).style(Style::default().fg(Color::DarkGray))
            } else {
                Paragraph::new(shown)
            };
            frame.render_widget(paragraph.block(block), field_area);

            if field.focused {
                let x = field_area.x.saturating_add(1).saturating_add(text_columns(shown));
                cursor = Some((x, field_area.y + 1));
            }

            if let Some(error) = field.error {
                frame.render_widget(
                    Paragraph::new(format!("  {error}")).style(error_style),
                    rows[row],
                );
                row += 1;
            }
        }

        if let Some(error) = self.form_error {
            frame.render_widget(
                Paragraph::new(error)
                    .style(error_style.add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center),
                rows[row],
            );
            row += 1;
        }

        // Blank spacer row, then the button.
        frame.render_widget(
            Paragraph::new(format!("[ {} ]", self.submit_label))
                .style(Style::default().fg(Color::Black).bg(Color::Yellow))
                .alignment(Alignment::Center),
            rows[row + 1],
        );

        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::ALL_FIELDS_REQUIRED;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(modal: &mut FormModal) -> (String, ratatui::layout::Position) {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| modal.render(f, f.area())).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        let cursor = terminal.get_cursor_position().unwrap();
        (text, cursor)
    }

    #[test]
    fn test_blank_author_form_shows_placeholders() {
        let form = AuthorForm::blank();
        let (text, _) = render(&mut FormModal::author(&form));
        assert!(text.contains("Add New Author"));
        assert!(text.contains("Author Name"));
        assert!(text.contains("Nationality"));
        assert!(text.contains("[ Add Author ]"));
    }

    #[test]
    fn test_author_form_error_is_shown() {
        let form = AuthorForm {
            error: Some(ALL_FIELDS_REQUIRED.to_string()),
            ..AuthorForm::blank()
        };
        let (text, _) = render(&mut FormModal::author(&form));
        assert!(text.contains(ALL_FIELDS_REQUIRED));
    }

    #[test]
    fn test_book_form_shows_field_errors() {
        let mut form = BookForm::blank();
        form.year = "abc".to_string();
        form.validate();
        let (text, _) = render(&mut FormModal::book(&form));
        assert!(text.contains("Title is required."));
        assert!(text.contains("Summary is required."));
        assert!(text.contains("Valid published year is required."));
        assert!(text.contains("[ Add Book ]"));
    }

    #[test]
    fn test_cursor_follows_focused_field() {
        let form = AuthorForm {
            name: "Ana".to_string(),
            ..AuthorForm::blank()
        };
        let modal = &mut FormModal::author(&form);
        let (_, cursor) = render(modal);
        let overlay = centered_fixed(MODAL_WIDTH, modal.height(), Rect::new(0, 0, 80, 30));
        // Modal border + padding + field border, then three characters.
        assert_eq!(cursor.x, overlay.x + 1 + 1 + 1 + 3);
        assert_eq!(cursor.y, overlay.y + 1 + 1);
    }

    #[test]
    fn test_cursor_stays_inside_modal_for_huge_paste() {
        let form = AuthorForm {
            name: "n".repeat(70_000),
            ..AuthorForm::blank()
        };
        let modal = &mut FormModal::author(&form);
        let (_, cursor) = render(modal);
        let overlay = centered_fixed(MODAL_WIDTH, modal.height(), Rect::new(0, 0, 80, 30));
        assert!(cursor.x < overlay.x + overlay.width);
        assert_eq!(cursor.y, overlay.y + 1 + 1);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("abcdef", 10), "abcdef");
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("日本語", 4), "本語");
    }
}
