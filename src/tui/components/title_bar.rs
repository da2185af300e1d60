//! # TitleBar Component
//!
//! Single-line bar at the top of the screen.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(
//!     "Books by Ursula K. Le Guin".to_string(),
//!     app.status_message.clone(),
//!     tui.spinner(app),
//! );
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Busy**: `"Folio | Authors | Welcome to Folio! | ⠹"`
//! 2. **Status message**: `"Folio | Authors | Welcome to Folio!"`
//! 3. **Default**: `"Folio | Authors"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar showing where the user is and what is happening.
///
/// # Props
///
/// - `location`: Current screen ("Authors", "Books by ...")
/// - `status_message`: App-level status text
/// - `spinner`: Spinner glyph while a request is in flight
pub struct TitleBar {
    pub location: String,
    pub status_message: String,
    pub spinner: Option<&'static str>,
}

impl TitleBar {
    pub fn new(location: String, status_message: String, spinner: Option<&'static str>) -> Self {
        Self {
            location,
            status_message,
            spinner,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Folio",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {}", self.location)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(glyph) = self.spinner {
            spans.push(Span::styled(
                format!(" | {glyph}"),
                Style::default().fg(Color::Cyan),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
