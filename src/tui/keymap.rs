//! # Key Map
//!
//! Translates `TuiEvent`s into core `Action`s based on what is on screen.
//! Overlays take precedence over the list underneath, in this order:
//!
//! ```text
//! Ctrl+C ─► splash / processing ─► form ─► delete confirm ─► fetch error ─► screen
//! ```

use crate::core::action::Action;
use crate::core::form::{FieldFocus, TextEdit};
use crate::core::listing::Listing;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::search_box::{SearchBox, SearchEvent};
use crate::tui::event::TuiEvent;

/// Input mode of the author list: browsing rows, or typing into the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
}

pub fn map_event(app: &App, search: &mut SearchBox, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    // The splash and the processing overlay block everything else.
    if app.splash || app.is_processing() {
        return None;
    }

    let form_open = match &app.books {
        Some(books) => books.form.is_some(),
        None => app.authors.form.is_some(),
    };
    if form_open {
        return map_form(event);
    }

    let (confirming, failed) = match &app.books {
        Some(books) => overlay_flags(&books.listing),
        None => overlay_flags(&app.authors.listing),
    };
    if confirming {
        return match event {
            TuiEvent::InputChar('y') | TuiEvent::Submit => Some(Action::ConfirmDelete),
            TuiEvent::InputChar('n') | TuiEvent::Escape => Some(Action::CancelDelete),
            _ => None,
        };
    }
    if failed {
        // No retry affordance: only leave.
        return match (app.screen(), event) {
            (_, TuiEvent::InputChar('q')) => Some(Action::Quit),
            (Screen::Books, TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('b')) => {
                Some(Action::NavigateBack)
            }
            _ => None,
        };
    }

    match app.screen() {
        Screen::Authors => map_authors(app, search, event),
        Screen::Books => map_books(event),
    }
}

fn overlay_flags<T: Clone>(listing: &Listing<T>) -> (bool, bool) {
    (listing.pending_delete.is_some(), listing.error().is_some())
}

fn map_form(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape => Some(Action::CancelForm),
        TuiEvent::Submit => Some(Action::SubmitForm),
        TuiEvent::Tab | TuiEvent::CursorDown => Some(Action::MoveFocus(FieldFocus::Next)),
        TuiEvent::BackTab | TuiEvent::CursorUp => Some(Action::MoveFocus(FieldFocus::Previous)),
        TuiEvent::InputChar(c) => Some(Action::EditForm(TextEdit::Insert(*c))),
        TuiEvent::Paste(text) => Some(Action::EditForm(TextEdit::Paste(text.clone()))),
        TuiEvent::Backspace => Some(Action::EditForm(TextEdit::Backspace)),
        _ => None,
    }
}

fn map_authors(app: &App, search: &mut SearchBox, event: &TuiEvent) -> Option<Action> {
    if search.mode == InputMode::Search {
        return match search.handle_event(event)? {
            SearchEvent::Edit(edit) => Some(Action::EditSearch(edit)),
            SearchEvent::SelectNext => Some(Action::SelectNext),
            SearchEvent::SelectPrevious => Some(Action::SelectPrevious),
            SearchEvent::Done => None,
        };
    }

    match event {
        TuiEvent::InputChar('/') => {
            search.mode = InputMode::Search;
            None
        }
        TuiEvent::Escape if !app.authors.search.is_empty() => {
            Some(Action::EditSearch(TextEdit::Clear))
        }
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('a') => Some(Action::OpenCreateForm),
        TuiEvent::InputChar('e') => Some(Action::OpenEditForm),
        TuiEvent::InputChar('d') => Some(Action::RequestDelete),
        TuiEvent::InputChar('j') | TuiEvent::CursorDown => Some(Action::SelectNext),
        TuiEvent::InputChar('k') | TuiEvent::CursorUp => Some(Action::SelectPrevious),
        TuiEvent::Submit => Some(Action::OpenSelectedAuthor),
        _ => None,
    }
}

fn map_books(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('a') => Some(Action::OpenCreateForm),
        TuiEvent::InputChar('e') => Some(Action::OpenEditForm),
        TuiEvent::InputChar('d') => Some(Action::RequestDelete),
        TuiEvent::InputChar('j') | TuiEvent::CursorDown => Some(Action::SelectNext),
        TuiEvent::InputChar('k') | TuiEvent::CursorUp => Some(Action::SelectPrevious),
        TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('b') => {
            Some(Action::NavigateBack)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::{sample_authors, sample_books, test_app};

    fn ready_app() -> App {
        let mut app = test_app();
        update(&mut app, Action::Ready);
        update(&mut app, Action::AuthorsFetched(Ok(sample_authors())));
        app
    }

    #[test]
    fn test_splash_swallows_keys_but_not_force_quit() {
        let app = test_app();
        let mut search = SearchBox::new();
        assert_eq!(map_event(&app, &mut search, &TuiEvent::InputChar('a')), None);
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_author_list_bindings() {
        let app = ready_app();
        let mut search = SearchBox::new();
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::InputChar('a')),
            Some(Action::OpenCreateForm)
        );
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::Submit),
            Some(Action::OpenSelectedAuthor)
        );
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::CursorDown),
            Some(Action::SelectNext)
        );
    }

    #[test]
    fn test_slash_enters_search_mode_and_typing_edits_search() {
        let app = ready_app();
        let mut search = SearchBox::new();
        assert_eq!(map_event(&app, &mut search, &TuiEvent::InputChar('/')), None);
        assert_eq!(search.mode, InputMode::Search);
        // 'a' now types instead of opening the form.
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::InputChar('a')),
            Some(Action::EditSearch(TextEdit::Insert('a')))
        );
        assert_eq!(map_event(&app, &mut search, &TuiEvent::Escape), None);
        assert_eq!(search.mode, InputMode::Browse);
    }

    #[test]
    fn test_form_captures_typing() {
        let mut app = ready_app();
        update(&mut app, Action::OpenCreateForm);
        let mut search = SearchBox::new();
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::InputChar('q')),
            Some(Action::EditForm(TextEdit::Insert('q')))
        );
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::Tab),
            Some(Action::MoveFocus(FieldFocus::Next))
        );
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::Escape),
            Some(Action::CancelForm)
        );
    }

    #[test]
    fn test_confirm_dialog_bindings() {
        let mut app = ready_app();
        update(&mut app, Action::RequestDelete);
        let mut search = SearchBox::new();
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::InputChar('a')),
            None
        );
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::InputChar('y')),
            Some(Action::ConfirmDelete)
        );
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::Escape),
            Some(Action::CancelDelete)
        );
    }

    #[test]
    fn test_processing_blocks_input() {
        let mut app = ready_app();
        update(&mut app, Action::RequestDelete);
        update(&mut app, Action::ConfirmDelete);
        let mut search = SearchBox::new();
        assert_eq!(map_event(&app, &mut search, &TuiEvent::InputChar('a')), None);
    }

    #[test]
    fn test_detail_screen_back_keys() {
        let mut app = ready_app();
        update(&mut app, Action::OpenSelectedAuthor);
        update(
            &mut app,
            Action::BooksFetched {
                author_id: "a-1".into(),
                result: Ok(sample_books()),
            },
        );
        let mut search = SearchBox::new();
        for event in [TuiEvent::Escape, TuiEvent::Backspace, TuiEvent::InputChar('b')] {
            assert_eq!(
                map_event(&app, &mut search, &event),
                Some(Action::NavigateBack)
            );
        }
    }

    #[test]
    fn test_fetch_error_offers_no_retry() {
        let mut app = test_app();
        update(&mut app, Action::Ready);
        update(&mut app, Action::AuthorsFetched(Err("boom".into())));
        let mut search = SearchBox::new();
        assert_eq!(map_event(&app, &mut search, &TuiEvent::InputChar('a')), None);
        assert_eq!(map_event(&app, &mut search, &TuiEvent::Submit), None);
        assert_eq!(
            map_event(&app, &mut search, &TuiEvent::InputChar('q')),
            Some(Action::Quit)
        );
    }
}
