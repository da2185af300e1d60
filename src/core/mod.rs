//! # Core Application Logic
//!
//! This module contains Folio's business logic.
//! It knows nothing about any specific UI technology or about HTTP.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  GraphQL   │
//!            │  Adapter   │──spawns──► │  Catalog   │
//!            │ (ratatui)  │◄─Action─── │  (reqwest) │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`authors`] / [`books`]: per-screen state
//! - [`form`]: add/edit forms and their validation
//! - [`config`]: settings resolution

pub mod action;
pub mod authors;
pub mod books;
pub mod config;
pub mod form;
pub mod listing;
pub mod model;
pub mod state;
