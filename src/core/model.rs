//! # Domain Model
//!
//! Transient client-side copies of the two entities owned by the GraphQL
//! backend. Field names match the Hasura columns so the same structs serve
//! as wire types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub nationality: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub year: i32,
    /// Owning author. Older selections omit it, so it may be empty.
    #[serde(default)]
    pub author_id: String,
}

/// Navigation parameters for the author detail screen: exactly an id and a
/// display name, never re-derived from the author list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: String,
    pub name: String,
}

impl From<&Author> for AuthorRef {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.clone(),
            name: author.name.clone(),
        }
    }
}

/// Validated author fields, ready for an insert or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorInput {
    pub name: String,
    pub nationality: String,
    pub genre: String,
}

/// Validated book fields. `year` has already been parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookInput {
    pub title: String,
    pub summary: String,
    pub year: i32,
}

/// A write against the backend. Each one is sent exactly once and followed
/// by a re-fetch of the list it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    InsertAuthor(AuthorInput),
    UpdateAuthor { id: String, input: AuthorInput },
    DeleteAuthor { id: String },
    InsertBook { author_id: String, input: BookInput },
    UpdateBook { id: String, input: BookInput },
    DeleteBook { id: String },
}

impl Mutation {
    /// True for mutations issued from the author list screen.
    pub fn targets_authors(&self) -> bool {
        matches!(
            self,
            Mutation::InsertAuthor(_) | Mutation::UpdateAuthor { .. } | Mutation::DeleteAuthor { .. }
        )
    }

    /// One-line message shown when the backend rejects this mutation.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Mutation::InsertAuthor(_)
            | Mutation::UpdateAuthor { .. }
            | Mutation::DeleteAuthor { .. } => "Error processing request. Please try again.",
            Mutation::InsertBook { .. } => "Failed to add the book. Please try again.",
            Mutation::UpdateBook { .. } => "Failed to update the book. Please try again.",
            Mutation::DeleteBook { .. } => "Failed to delete the book. Please try again.",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mutation::InsertAuthor(_) => "AddAuthor",
            Mutation::UpdateAuthor { .. } => "UpdateAuthor",
            Mutation::DeleteAuthor { .. } => "DeleteAuthor",
            Mutation::InsertBook { .. } => "AddBook",
            Mutation::UpdateBook { .. } => "UpdateBook",
            Mutation::DeleteBook { .. } => "DeleteBook",
        }
    }
}
