//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`, `LandingPage`, `StatusOverlay`, `ConfirmDialog`
//!
//! ### Transient Wrappers
//!
//! Created each frame with borrowed state, so list offsets persist in
//! `TuiState` while the rows come straight from `App`:
//! - `AuthorList`, `BookList`, `FormModal`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: owns the author list's input mode, emits `SearchEvent`s
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file, layout helpers)
//! ├── title_bar.rs       (top status bar)
//! ├── landing.rs         (splash)
//! ├── logo.rs            (braille canvas logo)
//! ├── search_box.rs      (author name filter)
//! ├── author_list.rs     (author rows)
//! ├── book_list.rs       (book rows)
//! ├── form_modal.rs      (add/edit overlay)
//! ├── confirm_dialog.rs  (delete confirmation)
//! └── status_overlay.rs  (loading, processing, fetch error)
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub mod author_list;
pub mod book_list;
pub mod confirm_dialog;
pub mod form_modal;
pub mod landing;
pub mod logo;
pub mod search_box;
pub mod status_overlay;
mod title_bar;

pub use author_list::AuthorList;
pub use book_list::BookList;
pub use confirm_dialog::ConfirmDialog;
pub use form_modal::FormModal;
pub use landing::LandingPage;
pub use search_box::SearchBox;
pub use status_overlay::StatusOverlay;
pub use title_bar::TitleBar;

/// A `width` x `height` rect centered in `outer`, shrunk to fit.
pub fn centered_fixed(width: u16, height: u16, outer: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(row);
    center
}

/// Display width of `text` in terminal columns, saturating at `u16::MAX`.
pub fn text_columns(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed_is_centered_and_clamped() {
        let outer = Rect::new(0, 0, 80, 24);
        let rect = centered_fixed(40, 10, outer);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (20, 7, 40, 10));

        let tiny = centered_fixed(40, 10, Rect::new(0, 0, 20, 5));
        assert_eq!((tiny.width, tiny.height), (20, 5));
    }

    #[test]
    fn test_text_columns_saturates() {
        assert_eq!(text_columns("García"), 6);
        assert_eq!(text_columns("世界"), 4);
        assert_eq!(text_columns(&"x".repeat(70_000)), u16::MAX);
    }
}
