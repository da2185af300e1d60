//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Effects
//!
//! `update()` never performs I/O. Each `Effect` it returns is handed to
//! `spawn_effect`, which runs it against the shared `Catalog` on a tokio task
//! and sends the resulting `Action` back over an mpsc channel. The loop drains
//! that channel every iteration.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (splash, loading, processing): draws every ~80ms so the
//!   logo and spinner move.
//! - **Idle**: sleeps up to 500ms, only redraws on events or results.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod keymap;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::widgets::ListState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::listing::Remote;
use crate::core::state::{App, Screen};
use crate::graphql::{Catalog, GraphQlClient, HasuraCatalog, execute_effect};
use crate::tui::components::SearchBox;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search: SearchBox,
    pub author_list: ListState,
    pub book_list: ListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search: SearchBox::new(),
            author_list: ListState::default(),
            book_list: ListState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

/// Build the process-wide catalog from the resolved endpoint and secret.
pub fn build_catalog(config: &ResolvedConfig) -> std::io::Result<Arc<dyn Catalog>> {
    let client = GraphQlClient::new(config.endpoint.clone(), config.admin_secret.as_deref())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(Arc::new(HasuraCatalog::new(client)))
}

/// True while something on screen is moving.
fn is_animating(app: &App) -> bool {
    if app.splash || app.is_processing() {
        return true;
    }
    match &app.books {
        Some(books) => books.listing.is_loading(),
        None => matches!(app.authors.listing.remote, Remote::Loading | Remote::Idle),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let catalog = build_catalog(&config)?;
    let mut app = App::from_config(catalog, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut last_screen = app.screen();

    loop {
        if app.splash && start_time.elapsed() >= config.splash {
            let effect = update(&mut app, Action::Ready);
            spawn_effect(&app, effect, tx.clone());
            needs_redraw = true;
        }

        // A freshly pushed detail screen starts scrolled to the top.
        if app.screen() != last_screen {
            if app.screen() == Screen::Books {
                tui.book_list = ListState::default();
            }
            last_screen = app.screen();
        }

        let animating = is_animating(&app);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let tick = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, tick))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = keymap::map_event(&app, &mut tui.search, &event) else {
                continue;
            };
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                effect => spawn_effect(&app, effect, tx.clone()),
            }
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            spawn_effect(&app, effect, tx.clone());
        }
    }

    info!("Folio shutting down");
    ratatui::restore();
    Ok(())
}

/// Runs an I/O effect on a tokio task and reports its result as an `Action`.
fn spawn_effect(app: &App, effect: Effect, tx: mpsc::Sender<Action>) {
    if matches!(effect, Effect::None | Effect::Quit) {
        return;
    }
    info!("Spawning effect: {:?}", effect);
    let catalog = app.catalog.clone();
    tokio::spawn(async move {
        if let Some(action) = execute_effect(catalog.as_ref(), effect).await
            && tx.send(action).is_err()
        {
            warn!("Failed to deliver effect result: receiver dropped");
        }
    });
}
