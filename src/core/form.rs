//! # Forms
//!
//! The add/edit modals for both screens. One form serves both purposes; the
//! [`FormMode`] decides whether a valid submission becomes an insert or an
//! update-by-id.
//!
//! ```text
//! open blank ──► Create ──┐
//!                         ├─► validate() ─► Some(input) ─► Mutation
//! open from row ► Edit{id}┘        │
//!                                  └─► None (errors set, form stays open)
//! ```
//!
//! Validation differs per screen: the author form reports one form-level
//! error, the book form reports one message per field.

use crate::core::model::{Author, AuthorInput, Book, BookInput};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required!";
pub const TITLE_REQUIRED: &str = "Title is required.";
pub const SUMMARY_REQUIRED: &str = "Summary is required.";
pub const YEAR_REQUIRED: &str = "Valid published year is required.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit { target_id: String },
}

/// A single keystroke-level change to a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Paste(String),
    Backspace,
    Clear,
}

impl TextEdit {
    pub fn apply(&self, text: &mut String) {
        match self {
            TextEdit::Insert(c) => text.push(*c),
            // Fields are single-line.
            TextEdit::Paste(s) => text.extend(s.chars().filter(|c| !c.is_control())),
            TextEdit::Backspace => {
                text.pop();
            }
            TextEdit::Clear => text.clear(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    Next,
    Previous,
}

/// Moves a focus index through `count` fields, wrapping at both ends.
fn move_focus(current: usize, count: usize, direction: FieldFocus) -> usize {
    match direction {
        FieldFocus::Next => (current + 1) % count,
        FieldFocus::Previous => (current + count - 1) % count,
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Any finite number is a valid year; the fraction is dropped.
/// `None` when the text is not a number or falls outside `i32`.
fn parse_year(text: &str) -> Option<i32> {
    let value = text.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let whole = value.trunc();
    if whole < f64::from(i32::MIN) || whole > f64::from(i32::MAX) {
        return None;
    }
    Some(whole as i32)
}

// ============================================================================
// Author form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Name,
    Nationality,
    Genre,
}

impl AuthorField {
    pub const ALL: [AuthorField; 3] = [AuthorField::Name, AuthorField::Nationality, AuthorField::Genre];

    pub fn placeholder(self) -> &'static str {
        match self {
            AuthorField::Name => "Author Name",
            AuthorField::Nationality => "Nationality",
            AuthorField::Genre => "Genre",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorForm {
    pub mode: FormMode,
    pub name: String,
    pub nationality: String,
    pub genre: String,
    pub focus: usize,
    pub error: Option<String>,
}

impl AuthorForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Pre-fills every field from the author being edited.
    pub fn editing(author: &Author) -> Self {
        Self {
            mode: FormMode::Edit {
                target_id: author.id.clone(),
            },
            name: author.name.clone(),
            nationality: author.nationality.clone(),
            genre: author.genre.clone(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Author",
            FormMode::Edit { .. } => "Edit Author",
        }
    }

    pub fn value(&self, field: AuthorField) -> &str {
        match field {
            AuthorField::Name => &self.name,
            AuthorField::Nationality => &self.nationality,
            AuthorField::Genre => &self.genre,
        }
    }

    fn value_mut(&mut self, field: AuthorField) -> &mut String {
        match field {
            AuthorField::Name => &mut self.name,
            AuthorField::Nationality => &mut self.nationality,
            AuthorField::Genre => &mut self.genre,
        }
    }

    pub fn focused_field(&self) -> AuthorField {
        AuthorField::ALL[self.focus % AuthorField::ALL.len()]
    }

    pub fn edit(&mut self, edit: &TextEdit) {
        let field = self.focused_field();
        edit.apply(self.value_mut(field));
    }

    pub fn move_focus(&mut self, direction: FieldFocus) {
        self.focus = move_focus(self.focus, AuthorField::ALL.len(), direction);
    }

    /// Checks that no field is empty. Whitespace counts as content here. On
    /// failure the single form-level error is set and the field values are
    /// left untouched for correction.
    pub fn validate(&mut self) -> Option<AuthorInput> {
        self.error = None;
        if AuthorField::ALL.iter().any(|f| self.value(*f).is_empty()) {
            self.error = Some(ALL_FIELDS_REQUIRED.to_string());
            return None;
        }
        Some(AuthorInput {
            name: self.name.clone(),
            nationality: self.nationality.clone(),
            genre: self.genre.clone(),
        })
    }
}

// ============================================================================
// Book form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Summary,
    Year,
}

impl BookField {
    pub const ALL: [BookField; 3] = [BookField::Title, BookField::Summary, BookField::Year];

    pub fn placeholder(self) -> &'static str {
        match self {
            BookField::Title => "Book Title",
            BookField::Summary => "Book Summary",
            BookField::Year => "Published Year",
        }
    }
}

/// Per-field validation messages. `None` means the field is fine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookFormErrors {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub year: Option<String>,
}

impl BookFormErrors {
    pub fn for_field(&self, field: BookField) -> Option<&str> {
        match field {
            BookField::Title => self.title.as_deref(),
            BookField::Summary => self.summary.as_deref(),
            BookField::Year => self.year.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.summary.is_none() && self.year.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookForm {
    pub mode: FormMode,
    pub title: String,
    pub summary: String,
    /// Kept as text while editing; parsed on submit.
    pub year: String,
    pub focus: usize,
    pub errors: BookFormErrors,
}

impl BookForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn editing(book: &Book) -> Self {
        Self {
            mode: FormMode::Edit {
                target_id: book.id.clone(),
            },
            title: book.title.clone(),
            summary: book.summary.clone(),
            year: book.year.to_string(),
            ..Self::default()
        }
    }

    pub fn title_text(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Book",
            FormMode::Edit { .. } => "Edit Book",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Book",
            FormMode::Edit { .. } => "Update Book",
        }
    }

    pub fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Summary => &self.summary,
            BookField::Year => &self.year,
        }
    }

    fn value_mut(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Summary => &mut self.summary,
            BookField::Year => &mut self.year,
        }
    }

    pub fn focused_field(&self) -> BookField {
        BookField::ALL[self.focus % BookField::ALL.len()]
    }

    pub fn edit(&mut self, edit: &TextEdit) {
        let field = self.focused_field();
        edit.apply(self.value_mut(field));
    }

    pub fn move_focus(&mut self, direction: FieldFocus) {
        self.focus = move_focus(self.focus, BookField::ALL.len(), direction);
    }

    /// Validates each field independently, so every problem is reported at
    /// once. The year must parse as a number here, never at submission.
    pub fn validate(&mut self) -> Option<BookInput> {
        let mut errors = BookFormErrors::default();
        if is_blank(&self.title) {
            errors.title = Some(TITLE_REQUIRED.to_string());
        }
        if is_blank(&self.summary) {
            errors.summary = Some(SUMMARY_REQUIRED.to_string());
        }
        let year = parse_year(&self.year);
        if year.is_none() {
            errors.year = Some(YEAR_REQUIRED.to_string());
        }
        self.errors = errors;

        let year = year?;
        if !self.errors.is_empty() {
            return None;
        }
        Some(BookInput {
            title: self.title.clone(),
            summary: self.summary.clone(),
            year,
        })
    }
}
