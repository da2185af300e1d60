//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User presses `a`? That's `Action::OpenCreateForm`.
//! The backend answers? That's `Action::AuthorsFetched(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an [`Effect`] describing the I/O that should happen
//! next. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The mutation round trip, for either screen:
//!
//! ```text
//! SubmitForm / ConfirmDelete ─► processing = true ─► Effect::Mutate
//!        MutationFinished(Ok)  ─► Effect::Fetch(NetworkOnly) ─► *Fetched ─► processing = false
//!        MutationFinished(Err) ─► processing = false, notice shown, no re-fetch
//! ```

use log::{debug, info, warn};

use crate::core::books::BookScreen;
use crate::core::form::{AuthorForm, BookForm, FieldFocus, FormMode, TextEdit};
use crate::core::model::{Author, AuthorRef, Book, Mutation};
use crate::core::state::{App, Screen};
use crate::graphql::FetchPolicy;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Splash finished; mount the first screen.
    Ready,
    Quit,
    /// Pop the detail screen.
    NavigateBack,
    /// Push the detail screen for the highlighted author.
    OpenSelectedAuthor,
    SelectNext,
    SelectPrevious,
    EditSearch(TextEdit),

    OpenCreateForm,
    OpenEditForm,
    EditForm(TextEdit),
    MoveFocus(FieldFocus),
    SubmitForm,
    CancelForm,

    RequestDelete,
    ConfirmDelete,
    CancelDelete,

    // Backend results
    AuthorsFetched(Result<Vec<Author>, String>),
    BooksFetched {
        author_id: String,
        result: Result<Vec<Book>, String>,
    },
    MutationFinished {
        mutation: Mutation,
        result: Result<(), String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Authors(FetchPolicy),
    Books { author_id: String, policy: FetchPolicy },
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Fetch(Fetch),
    Mutate(Mutation),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);

    // Backend results and quitting are always processed. Everything else is
    // user input, which the splash and the processing overlay swallow.
    match action {
        Action::Quit => return Effect::Quit,
        Action::Ready => return ready(app),
        Action::AuthorsFetched(result) => return authors_fetched(app, result),
        Action::BooksFetched { author_id, result } => {
            return books_fetched(app, &author_id, result);
        }
        Action::MutationFinished { mutation, result } => {
            return mutation_finished(app, mutation, result);
        }
        _ => {}
    }

    if app.splash || app.is_processing() {
        debug!("Input ignored while busy: {:?}", action);
        return Effect::None;
    }

    match app.screen() {
        Screen::Authors => update_authors(app, action),
        Screen::Books => update_books(app, action),
    }
}

// ============================================================================
// Navigation shell
// ============================================================================

fn ready(app: &mut App) -> Effect {
    if !app.splash {
        return Effect::None;
    }
    app.splash = false;
    info!("Splash dismissed");
    match app.initial_author.take() {
        Some(author) => open_books(app, author),
        None => mount_authors(app),
    }
}

fn mount_authors(app: &mut App) -> Effect {
    app.authors.listing.remote = crate::core::listing::Remote::Loading;
    Effect::Fetch(Fetch::Authors(FetchPolicy::CacheFirst))
}

fn open_books(app: &mut App, author: AuthorRef) -> Effect {
    info!("Opening books for {} ({})", author.name, author.id);
    let author_id = author.id.clone();
    app.books = Some(BookScreen::mount(author));
    Effect::Fetch(Fetch::Books {
        author_id,
        policy: FetchPolicy::CacheFirst,
    })
}

fn navigate_back(app: &mut App) -> Effect {
    if app.books.take().is_none() {
        return Effect::None;
    }
    // Deep-linked sessions never mounted the author list.
    if matches!(app.authors.listing.remote, crate::core::listing::Remote::Idle) {
        return mount_authors(app);
    }
    Effect::None
}

// ============================================================================
// Author list screen
// ============================================================================

fn update_authors(app: &mut App, action: Action) -> Effect {
    let screen = &mut app.authors;
    match action {
        Action::SelectNext => screen.listing.select_next(screen.filtered.len()),
        Action::SelectPrevious => screen.listing.select_previous(),
        Action::EditSearch(edit) => screen.edit_search(&edit),
        Action::OpenSelectedAuthor => {
            if let Some(author) = screen.selected_author() {
                let params = AuthorRef::from(author);
                return open_books(app, params);
            }
        }
        Action::OpenCreateForm => {
            screen.listing.notice = None;
            screen.form = Some(AuthorForm::blank());
        }
        Action::OpenEditForm => {
            if let Some(author) = screen.selected_author() {
                screen.form = Some(AuthorForm::editing(author));
                screen.listing.notice = None;
            }
        }
        Action::EditForm(edit) => {
            if let Some(form) = screen.form.as_mut() {
                form.edit(&edit);
            }
        }
        Action::MoveFocus(direction) => {
            if let Some(form) = screen.form.as_mut() {
                form.move_focus(direction);
            }
        }
        Action::CancelForm => screen.form = None,
        Action::SubmitForm => {
            let Some(form) = screen.form.as_mut() else {
                return Effect::None;
            };
            let Some(input) = form.validate() else {
                debug!("Author form invalid: {:?}", form.error);
                return Effect::None;
            };
            let mutation = match &form.mode {
                FormMode::Create => Mutation::InsertAuthor(input),
                FormMode::Edit { target_id } => Mutation::UpdateAuthor {
                    id: target_id.clone(),
                    input,
                },
            };
            // The modal closes on submission; its data is not kept.
            screen.form = None;
            screen.listing.begin_mutation();
            return Effect::Mutate(mutation);
        }
        Action::RequestDelete => {
            screen.listing.pending_delete = screen.selected_author().cloned();
        }
        Action::CancelDelete => screen.listing.pending_delete = None,
        Action::ConfirmDelete => {
            if let Some(author) = screen.listing.pending_delete.take() {
                screen.listing.begin_mutation();
                return Effect::Mutate(Mutation::DeleteAuthor { id: author.id });
            }
        }
        Action::NavigateBack => {}
        _ => {}
    }
    Effect::None
}

fn authors_fetched(app: &mut App, result: Result<Vec<Author>, String>) -> Effect {
    match &result {
        Ok(authors) => app.status_message = format!("{} authors", authors.len()),
        Err(e) => warn!("Author query failed: {}", e),
    }
    app.authors.receive(result);
    Effect::None
}

// ============================================================================
// Author detail screen
// ============================================================================

fn update_books(app: &mut App, action: Action) -> Effect {
    if matches!(action, Action::NavigateBack) {
        return navigate_back(app);
    }
    let Some(screen) = app.books.as_mut() else {
        return Effect::None;
    };
    let len = screen.listing.items().len();
    match action {
        Action::SelectNext => screen.listing.select_next(len),
        Action::SelectPrevious => screen.listing.select_previous(),
        Action::OpenCreateForm => {
            screen.listing.notice = None;
            screen.form = Some(BookForm::blank());
        }
        Action::OpenEditForm => {
            if let Some(book) = screen.selected_book() {
                screen.form = Some(BookForm::editing(book));
                screen.listing.notice = None;
            }
        }
        Action::EditForm(edit) => {
            if let Some(form) = screen.form.as_mut() {
                form.edit(&edit);
            }
        }
        Action::MoveFocus(direction) => {
            if let Some(form) = screen.form.as_mut() {
                form.move_focus(direction);
            }
        }
        Action::CancelForm => screen.form = None,
        Action::SubmitForm => {
            let Some(form) = screen.form.as_mut() else {
                return Effect::None;
            };
            let Some(input) = form.validate() else {
                debug!("Book form invalid: {:?}", form.errors);
                return Effect::None;
            };
            let mutation = match &form.mode {
                FormMode::Create => Mutation::InsertBook {
                    author_id: screen.author.id.clone(),
                    input,
                },
                FormMode::Edit { target_id } => Mutation::UpdateBook {
                    id: target_id.clone(),
                    input,
                },
            };
            screen.form = None;
            screen.listing.begin_mutation();
            return Effect::Mutate(mutation);
        }
        Action::RequestDelete => {
            screen.listing.pending_delete = screen.selected_book().cloned();
        }
        Action::CancelDelete => screen.listing.pending_delete = None,
        Action::ConfirmDelete => {
            if let Some(book) = screen.listing.pending_delete.take() {
                screen.listing.begin_mutation();
                return Effect::Mutate(Mutation::DeleteBook { id: book.id });
            }
        }
        _ => {}
    }
    Effect::None
}

fn books_fetched(app: &mut App, author_id: &str, result: Result<Vec<Book>, String>) -> Effect {
    match app.books.as_mut() {
        Some(screen) if screen.author.id == author_id => {
            if let Ok(books) = &result {
                app.status_message = format!("{} books", books.len());
            }
            screen.receive(result);
        }
        _ => debug!("Dropping books for {}: screen no longer active", author_id),
    }
    Effect::None
}

// ============================================================================
// Mutation results (both screens)
// ============================================================================

fn mutation_finished(app: &mut App, mutation: Mutation, result: Result<(), String>) -> Effect {
    if mutation.targets_authors() {
        let listing = &mut app.authors.listing;
        return match result {
            Ok(()) => {
                info!("{} succeeded, re-fetching authors", mutation.label());
                app.status_message = format!("{} done", mutation.label());
                Effect::Fetch(Fetch::Authors(FetchPolicy::NetworkOnly))
            }
            Err(e) => {
                warn!("{} failed: {}", mutation.label(), e);
                listing.fail_mutation(mutation.failure_message());
                Effect::None
            }
        };
    }

    let Some(screen) = app.books.as_mut() else {
        warn!("{} finished with no detail screen mounted", mutation.label());
        return Effect::None;
    };
    match result {
        Ok(()) => {
            info!("{} succeeded, re-fetching books", mutation.label());
            app.status_message = format!("{} done", mutation.label());
            Effect::Fetch(Fetch::Books {
                author_id: screen.author.id.clone(),
                policy: FetchPolicy::NetworkOnly,
            })
        }
        Err(e) => {
            warn!("{} failed: {}", mutation.label(), e);
            screen.listing.fail_mutation(mutation.failure_message());
            Effect::None
        }
    }
}
