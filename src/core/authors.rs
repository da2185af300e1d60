//! # Author List Screen State
//!
//! All authors, a case-insensitive name filter over them, and the add/edit
//! form. The filtered view is recomputed whenever the search text or the
//! fetched set changes, never lazily.

use crate::core::form::{AuthorForm, TextEdit};
use crate::core::listing::Listing;
use crate::core::model::Author;

/// Returns the authors whose name contains `search`, ignoring case, in their
/// original order. An empty search matches everyone.
pub fn filter_authors<'a>(authors: &'a [Author], search: &str) -> Vec<&'a Author> {
    let needle = search.to_lowercase();
    authors
        .iter()
        .filter(|author| author.name.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct AuthorScreen {
    pub listing: Listing<Author>,
    pub search: String,
    /// Rows currently shown; `listing.selected` indexes into this.
    pub filtered: Vec<Author>,
    /// Add/edit modal. `Some` means it is open.
    pub form: Option<AuthorForm>,
}

impl AuthorScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_author(&self) -> Option<&Author> {
        self.filtered.get(self.listing.selected)
    }

    pub fn edit_search(&mut self, edit: &TextEdit) {
        edit.apply(&mut self.search);
        self.refresh_filter();
    }

    pub fn receive(&mut self, result: Result<Vec<Author>, String>) {
        self.listing.receive(result);
        self.refresh_filter();
    }

    fn refresh_filter(&mut self) {
        self.filtered = filter_authors(self.listing.items(), &self.search)
            .into_iter()
            .cloned()
            .collect();
        self.listing.clamp_selection(self.filtered.len());
    }
}
