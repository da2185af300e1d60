//! # Application State
//!
//! Core business state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn Catalog>     // shared backend connection
//! ├── splash: bool                  // splash screen still showing
//! ├── authors: AuthorScreen         // bottom of the navigation stack
//! ├── books: Option<BookScreen>     // detail screen, pushed on top
//! ├── initial_author: Option<..>    // deep link, consumed on Ready
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::authors::AuthorScreen;
use crate::core::books::BookScreen;
use crate::core::config::ResolvedConfig;
use crate::core::model::AuthorRef;
use crate::graphql::Catalog;

/// The screen on top of the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Authors,
    Books,
}

pub struct App {
    pub catalog: Arc<dyn Catalog>,
    pub splash: bool,
    pub authors: AuthorScreen,
    pub books: Option<BookScreen>,
    pub initial_author: Option<AuthorRef>,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            splash: true,
            authors: AuthorScreen::new(),
            books: None,
            initial_author: None,
            status_message: String::from("Welcome to Folio!"),
        }
    }

    pub fn from_config(catalog: Arc<dyn Catalog>, config: &ResolvedConfig) -> Self {
        Self {
            initial_author: config.initial_author.clone(),
            ..Self::new(catalog)
        }
    }

    pub fn screen(&self) -> Screen {
        if self.books.is_some() {
            Screen::Books
        } else {
            Screen::Authors
        }
    }

    /// True while the active screen has a mutation (or its re-fetch) in flight.
    pub fn is_processing(&self) -> bool {
        match &self.books {
            Some(books) => books.listing.processing,
            None => self.authors.listing.processing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Folio!");
        assert!(app.splash);
        assert_eq!(app.screen(), Screen::Authors);
        assert!(!app.is_processing());
        assert_eq!(app.catalog.endpoint(), "noop://catalog");
    }

    #[test]
    fn test_processing_tracks_top_screen() {
        let mut app = test_app();
        app.authors.listing.processing = true;
        assert!(app.is_processing());
        app.books = Some(BookScreen::mount(AuthorRef {
            id: "a".into(),
            name: "A".into(),
        }));
        assert!(!app.is_processing());
    }
}
