//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::model::{Author, Book, Mutation};
use crate::graphql::{Catalog, FetchPolicy, GraphQlError};

/// A catalog with no data for tests that don't need real API calls.
pub struct NoopCatalog;

#[async_trait]
impl Catalog for NoopCatalog {
    fn endpoint(&self) -> &str {
        "noop://catalog"
    }

    async fn authors(&self, _policy: FetchPolicy) -> Result<Vec<Author>, GraphQlError> {
        Ok(Vec::new())
    }

    async fn books_by_author(
        &self,
        _author_id: &str,
        _policy: FetchPolicy,
    ) -> Result<Vec<Book>, GraphQlError> {
        Ok(Vec::new())
    }

    async fn apply(&self, _mutation: &Mutation) -> Result<(), GraphQlError> {
        Ok(())
    }
}

/// An in-memory catalog that records every call it receives.
pub struct RecordingCatalog {
    authors: Vec<Author>,
    fail_mutations: bool,
    author_fetches: Mutex<Vec<FetchPolicy>>,
    mutations: Mutex<Vec<Mutation>>,
}

impl RecordingCatalog {
    pub fn with_authors(authors: Vec<Author>) -> Self {
        Self {
            authors,
            fail_mutations: false,
            author_fetches: Mutex::new(Vec::new()),
            mutations: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_mutations() -> Self {
        Self {
            fail_mutations: true,
            ..Self::with_authors(Vec::new())
        }
    }

    pub fn author_fetches(&self) -> Vec<FetchPolicy> {
        self.author_fetches.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.mutations.lock().unwrap().clone()
    }
}

#[async_trait]
impl Catalog for RecordingCatalog {
    fn endpoint(&self) -> &str {
        "memory://catalog"
    }

    async fn authors(&self, policy: FetchPolicy) -> Result<Vec<Author>, GraphQlError> {
        self.author_fetches.lock().unwrap().push(policy);
        Ok(self.authors.clone())
    }

    async fn books_by_author(
        &self,
        _author_id: &str,
        _policy: FetchPolicy,
    ) -> Result<Vec<Book>, GraphQlError> {
        Ok(sample_books())
    }

    async fn apply(&self, mutation: &Mutation) -> Result<(), GraphQlError> {
        self.mutations.lock().unwrap().push(mutation.clone());
        if self.fail_mutations {
            return Err(GraphQlError::Http {
                status: 500,
                body: "internal error".to_string(),
            });
        }
        Ok(())
    }
}

/// Creates a test App with a NoopCatalog.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopCatalog))
}

pub fn sample_authors() -> Vec<Author> {
    vec![
        Author {
            id: "a-1".to_string(),
            name: "Julio Cortázar".to_string(),
            nationality: "Argentine".to_string(),
            genre: "Short stories".to_string(),
        },
        Author {
            id: "a-2".to_string(),
            name: "Gabriel García Márquez".to_string(),
            nationality: "Colombian".to_string(),
            genre: "Magical realism".to_string(),
        },
        Author {
            id: "a-3".to_string(),
            name: "Clarice Lispector".to_string(),
            nationality: "Brazilian".to_string(),
            genre: "Modernism".to_string(),
        },
    ]
}

pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            id: "b-1".to_string(),
            title: "Bestiario".to_string(),
            summary: "Eight stories where the everyday turns strange.".to_string(),
            year: 1951,
            author_id: "a-1".to_string(),
        },
        Book {
            id: "b-2".to_string(),
            title: "Rayuela".to_string(),
            summary: "A novel that can be read in more than one order.".to_string(),
            year: 1963,
            author_id: "a-1".to_string(),
        },
    ]
}
