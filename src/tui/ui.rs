use crate::core::listing::{Listing, Remote};
use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::status_overlay::spinner_glyph;
use crate::tui::components::{
    AuthorList, BookList, ConfirmDialog, FormModal, LandingPage, StatusOverlay, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, tick: usize) {
    if app.splash {
        LandingPage::new(tick).render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let busy = match &app.books {
        Some(books) => is_busy(&books.listing),
        None => is_busy(&app.authors.listing),
    };
    let location = match &app.books {
        Some(books) => format!("Books by {}", books.author.name),
        None => "Authors".to_string(),
    };
    TitleBar::new(
        location,
        app.status_message.clone(),
        busy.then(|| spinner_glyph(tick)),
    )
    .render(frame, title_area);

    match app.screen() {
        Screen::Authors => draw_authors(frame, main_area, app, tui, tick),
        Screen::Books => draw_books(frame, main_area, app, tui, tick),
    }
}

fn is_busy<T: Clone>(listing: &Listing<T>) -> bool {
    listing.processing || matches!(listing.remote, Remote::Loading | Remote::Idle)
}

fn draw_authors(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, tick: usize) {
    let screen = &app.authors;
    match &screen.listing.remote {
        Remote::Idle | Remote::Loading => {
            StatusOverlay::Loading {
                message: "Fetching your authors".to_string(),
                tick,
            }
            .render(frame, area);
            return;
        }
        Remote::Failed(message) => {
            StatusOverlay::Failed {
                message: message.clone(),
                hint: " q Quit ",
            }
            .render(frame, area);
            return;
        }
        Remote::Loaded(_) => {}
    }

    AuthorList::new(screen, &tui.search, &mut tui.author_list).render(frame, area);

    if let Some(form) = &screen.form {
        FormModal::author(form).render(frame, area);
    } else if let Some(author) = &screen.listing.pending_delete {
        ConfirmDialog::new("author", author.name.clone()).render(frame, area);
    }
    if screen.listing.processing {
        StatusOverlay::Processing { tick }.render(frame, area);
    }
}

fn draw_books(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, tick: usize) {
    let Some(screen) = &app.books else {
        return;
    };
    match &screen.listing.remote {
        Remote::Idle | Remote::Loading => {
            StatusOverlay::Loading {
                message: format!("Fetching books by {}", screen.author.name),
                tick,
            }
            .render(frame, area);
            return;
        }
        Remote::Failed(message) => {
            StatusOverlay::Failed {
                message: message.clone(),
                hint: " Esc Back  q Quit ",
            }
            .render(frame, area);
            return;
        }
        Remote::Loaded(_) => {}
    }

    BookList::new(screen, &mut tui.book_list).render(frame, area);

    if let Some(form) = &screen.form {
        FormModal::book(form).render(frame, area);
    } else if let Some(book) = &screen.listing.pending_delete {
        ConfirmDialog::new("book", book.title.clone()).render(frame, area);
    }
    if screen.listing.processing {
        StatusOverlay::Processing { tick }.render(frame, area);
    }
}
