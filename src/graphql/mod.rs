//! # GraphQL Layer
//!
//! Everything that talks to the Hasura endpoint. The screens see only the
//! [`Catalog`] trait; the TUI runs [`execute_effect`] on a tokio task and
//! feeds the returned action back into the reducer.

pub mod catalog;
pub mod client;
pub mod error;
pub mod operations;

pub use catalog::{Catalog, HasuraCatalog, execute_effect};
pub use client::{FetchPolicy, GraphQlClient, Operation};
pub use error::GraphQlError;
