//! The fixed set of Hasura operations: list, insert, update, delete for
//! each entity, plus their variable and response shapes.

use serde::{Deserialize, Serialize};

use crate::core::model::{Author, AuthorInput, Book, BookInput};
use crate::graphql::client::Operation;

// ============================================================================
// Authors
// ============================================================================

pub const GET_AUTHORS: Operation = Operation {
    name: "GetAuthors",
    document: r#"query GetAuthors {
  Authors {
    id
    name
    nationality
    genre
  }
}"#,
};

pub const ADD_AUTHOR: Operation = Operation {
    name: "AddAuthor",
    document: r#"mutation AddAuthor($name: String!, $nationality: String!, $genre: String!) {
  insert_Authors(objects: { name: $name, nationality: $nationality, genre: $genre }) {
    returning {
      id
      name
      nationality
      genre
    }
  }
}"#,
};

pub const UPDATE_AUTHOR: Operation = Operation {
    name: "UpdateAuthor",
    document: r#"mutation UpdateAuthor($id: uuid!, $name: String!, $nationality: String!, $genre: String!) {
  update_Authors(
    where: { id: { _eq: $id } }
    _set: { name: $name, nationality: $nationality, genre: $genre }
  ) {
    returning {
      id
      name
      nationality
      genre
    }
  }
}"#,
};

pub const DELETE_AUTHOR: Operation = Operation {
    name: "DeleteAuthor",
    document: r#"mutation DeleteAuthor($id: uuid!) {
  delete_Authors(where: { id: { _eq: $id } }) {
    affected_rows
  }
}"#,
};

// ============================================================================
// Books
// ============================================================================

pub const GET_BOOKS_BY_AUTHOR: Operation = Operation {
    name: "GetBooksByAuthor",
    document: r#"query GetBooksByAuthor($authorId: uuid!) {
  Books(where: { author_id: { _eq: $authorId } }) {
    id
    title
    summary
    year
    author_id
  }
}"#,
};

pub const ADD_BOOK: Operation = Operation {
    name: "AddBook",
    document: r#"mutation AddBook($title: String!, $summary: String!, $year: Int!, $authorId: uuid!) {
  insert_Books_one(
    object: { title: $title, summary: $summary, year: $year, author_id: $authorId }
  ) {
    id
    title
  }
}"#,
};

pub const UPDATE_BOOK: Operation = Operation {
    name: "UpdateBook",
    document: r#"mutation UpdateBook($id: uuid!, $title: String!, $summary: String!, $year: Int!) {
  update_Books_by_pk(
    pk_columns: { id: $id }
    _set: { title: $title, summary: $summary, year: $year }
  ) {
    id
    title
  }
}"#,
};

pub const DELETE_BOOK: Operation = Operation {
    name: "DeleteBook",
    document: r#"mutation DeleteBook($id: uuid!) {
  delete_Books_by_pk(id: $id) {
    id
  }
}"#,
};

// ============================================================================
// Variables
// ============================================================================

/// Serializes as `{}`.
#[derive(Serialize, Debug)]
pub struct NoVariables {}

#[derive(Serialize, Debug)]
pub struct IdVariables<'a> {
    pub id: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthorIdVariables<'a> {
    pub author_id: &'a str,
}

#[derive(Serialize, Debug)]
pub struct UpdateAuthorVariables<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub input: &'a AuthorInput,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddBookVariables<'a> {
    #[serde(flatten)]
    pub input: &'a BookInput,
    pub author_id: &'a str,
}

#[derive(Serialize, Debug)]
pub struct UpdateBookVariables<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub input: &'a BookInput,
}

// ============================================================================
// Response data
// ============================================================================

#[derive(Deserialize, Debug)]
pub struct AuthorsData {
    #[serde(rename = "Authors")]
    pub authors: Vec<Author>,
}

#[derive(Deserialize, Debug)]
pub struct BooksData {
    #[serde(rename = "Books")]
    pub books: Vec<Book>,
}

#[derive(Deserialize, Debug)]
pub struct Returning<T> {
    pub returning: Vec<T>,
}

#[derive(Deserialize, Debug)]
pub struct AffectedRows {
    pub affected_rows: u64,
}

#[derive(Deserialize, Debug)]
pub struct InsertAuthorData {
    #[serde(rename = "insert_Authors")]
    pub inserted: Returning<Author>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateAuthorData {
    #[serde(rename = "update_Authors")]
    pub updated: Returning<Author>,
}

#[derive(Deserialize, Debug)]
pub struct DeleteAuthorData {
    #[serde(rename = "delete_Authors")]
    pub deleted: AffectedRows,
}

/// The `{ id title }` / `{ id }` selection of the book mutations.
#[derive(Deserialize, Debug)]
pub struct BookKey {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct InsertBookData {
    #[serde(rename = "insert_Books_one")]
    pub inserted: Option<BookKey>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateBookData {
    #[serde(rename = "update_Books_by_pk")]
    pub updated: Option<BookKey>,
}

#[derive(Deserialize, Debug)]
pub struct DeleteBookData {
    #[serde(rename = "delete_Books_by_pk")]
    pub deleted: Option<BookKey>,
}
