//! The seam between the screens and the backend.
//!
//! Screens only need "fetch this list" and "apply this mutation". `Catalog`
//! is that contract; `HasuraCatalog` fulfils it with the shared
//! [`GraphQlClient`].

use async_trait::async_trait;
use log::{info, warn};

use crate::core::action::{Action, Effect, Fetch};
use crate::core::model::{Author, Book, Mutation};
use crate::graphql::client::{FetchPolicy, GraphQlClient};
use crate::graphql::operations::{
    self, AddBookVariables, AuthorIdVariables, AuthorsData, BooksData, DeleteAuthorData,
    DeleteBookData, IdVariables, InsertAuthorData, InsertBookData, NoVariables,
    UpdateAuthorData, UpdateAuthorVariables, UpdateBookData, UpdateBookVariables,
};
use crate::graphql::GraphQlError;

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Where requests go, for display.
    fn endpoint(&self) -> &str;

    async fn authors(&self, policy: FetchPolicy) -> Result<Vec<Author>, GraphQlError>;

    async fn books_by_author(
        &self,
        author_id: &str,
        policy: FetchPolicy,
    ) -> Result<Vec<Book>, GraphQlError>;

    /// Sends one mutation. No retry.
    async fn apply(&self, mutation: &Mutation) -> Result<(), GraphQlError>;
}

pub struct HasuraCatalog {
    client: GraphQlClient,
}

impl HasuraCatalog {
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GraphQlClient {
        &self.client
    }
}

fn not_found(entity: &'static str, id: &str) -> GraphQlError {
    GraphQlError::NotFound {
        entity,
        id: id.to_string(),
    }
}

#[async_trait]
impl Catalog for HasuraCatalog {
    fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    async fn authors(&self, policy: FetchPolicy) -> Result<Vec<Author>, GraphQlError> {
        let data: AuthorsData = self
            .client
            .query(operations::GET_AUTHORS, &NoVariables {}, policy)
            .await?;
        Ok(data.authors)
    }

    async fn books_by_author(
        &self,
        author_id: &str,
        policy: FetchPolicy,
    ) -> Result<Vec<Book>, GraphQlError> {
        let data: BooksData = self
            .client
            .query(
                operations::GET_BOOKS_BY_AUTHOR,
                &AuthorIdVariables { author_id },
                policy,
            )
            .await?;
        Ok(data.books)
    }

    async fn apply(&self, mutation: &Mutation) -> Result<(), GraphQlError> {
        match mutation {
            Mutation::InsertAuthor(input) => {
                let data: InsertAuthorData =
                    self.client.mutate(operations::ADD_AUTHOR, input).await?;
                info!("Inserted {} author(s)", data.inserted.returning.len());
            }
            Mutation::UpdateAuthor { id, input } => {
                let data: UpdateAuthorData = self
                    .client
                    .mutate(operations::UPDATE_AUTHOR, &UpdateAuthorVariables { id, input })
                    .await?;
                if data.updated.returning.is_empty() {
                    return Err(not_found("author", id));
                }
            }
            Mutation::DeleteAuthor { id } => {
                let data: DeleteAuthorData = self
                    .client
                    .mutate(operations::DELETE_AUTHOR, &IdVariables { id })
                    .await?;
                if data.deleted.affected_rows == 0 {
                    return Err(not_found("author", id));
                }
            }
            Mutation::InsertBook { author_id, input } => {
                let data: InsertBookData = self
                    .client
                    .mutate(operations::ADD_BOOK, &AddBookVariables { input, author_id })
                    .await?;
                if let Some(book) = data.inserted {
                    info!("Inserted book {} ({:?})", book.id, book.title);
                }
            }
            Mutation::UpdateBook { id, input } => {
                let data: UpdateBookData = self
                    .client
                    .mutate(operations::UPDATE_BOOK, &UpdateBookVariables { id, input })
                    .await?;
                data.updated.ok_or_else(|| not_found("book", id))?;
            }
            Mutation::DeleteBook { id } => {
                let data: DeleteBookData = self
                    .client
                    .mutate(operations::DELETE_BOOK, &IdVariables { id })
                    .await?;
                data.deleted.ok_or_else(|| not_found("book", id))?;
            }
        }
        Ok(())
    }
}

/// Performs the I/O an [`Effect`] asks for and returns the resulting action.
/// `None` for effects that need no backend work.
pub async fn execute_effect(catalog: &dyn Catalog, effect: Effect) -> Option<Action> {
    match effect {
        Effect::Fetch(Fetch::Authors(policy)) => {
            let result = catalog.authors(policy).await.map_err(|e| {
                warn!("Fetching authors failed: {}", e);
                e.to_string()
            });
            Some(Action::AuthorsFetched(result))
        }
        Effect::Fetch(Fetch::Books { author_id, policy }) => {
            let result = catalog
                .books_by_author(&author_id, policy)
                .await
                .map_err(|e| {
                    warn!("Fetching books for {} failed: {}", author_id, e);
                    e.to_string()
                });
            Some(Action::BooksFetched { author_id, result })
        }
        Effect::Mutate(mutation) => {
            let result = catalog.apply(&mutation).await.map_err(|e| {
                warn!("{} failed: {}", mutation.label(), e);
                e.to_string()
            });
            Some(Action::MutationFinished { mutation, result })
        }
        Effect::None | Effect::Quit => None,
    }
}
