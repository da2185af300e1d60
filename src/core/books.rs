//! # Author Detail Screen State
//!
//! Books of one author. The author arrives as navigation parameters and is
//! never looked up again.

use crate::core::form::BookForm;
use crate::core::listing::Listing;
use crate::core::model::{AuthorRef, Book};

#[derive(Debug, Clone)]
pub struct BookScreen {
    pub author: AuthorRef,
    pub listing: Listing<Book>,
    pub form: Option<BookForm>,
}

impl BookScreen {
    /// A freshly mounted screen: each navigation gets its own instance.
    pub fn mount(author: AuthorRef) -> Self {
        Self {
            author,
            listing: Listing::loading(),
            form: None,
        }
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.listing.items().get(self.listing.selected)
    }

    pub fn receive(&mut self, result: Result<Vec<Book>, String>) {
        self.listing.receive(result);
        let len = self.listing.items().len();
        self.listing.clamp_selection(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_starts_loading() {
        let screen = BookScreen::mount(AuthorRef {
            id: "a-1".to_string(),
            name: "Octavia Butler".to_string(),
        });
        assert!(screen.listing.is_loading());
        assert!(screen.selected_book().is_none());
    }

    #[test]
    fn test_receive_clamps_selection() {
        let mut screen = BookScreen::mount(AuthorRef {
            id: "a-1".to_string(),
            name: "Octavia Butler".to_string(),
        });
        screen.listing.selected = 4;
        screen.receive(Ok(vec![Book {
            id: "b-1".to_string(),
            title: "Kindred".to_string(),
            summary: "Time travel.".to_string(),
            year: 1979,
            author_id: "a-1".to_string(),
        }]));
        assert_eq!(screen.listing.selected, 0);
        assert_eq!(screen.selected_book().map(|b| b.year), Some(1979));
    }
}
