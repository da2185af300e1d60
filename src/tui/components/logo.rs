//! # Logo
//!
//! The animated open-book logo, drawn on a braille `Canvas`. Frames are baked
//! from `assets/*.txt` by `build.rs`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};

include!(concat!(env!("OUT_DIR"), "/splash_frames.rs"));

/// Frames advance every this many animation ticks.
const TICKS_PER_FRAME: usize = 6;

pub struct Logo;

impl Logo {
    /// Width of the logo in terminal cells (2 braille dots per cell).
    pub fn required_width() -> u16 {
        (LOGO_WIDTH / 2.0).ceil() as u16 + 1
    }

    /// Height of the logo in terminal cells (4 braille dots per cell).
    pub fn required_height() -> u16 {
        (LOGO_HEIGHT / 4.0).ceil() as u16 + 1
    }

    pub fn render(frame: &mut Frame, area: Rect, tick: usize) {
        if LOGO_FRAMES.is_empty() {
            return;
        }
        let points = LOGO_FRAMES[(tick / TICKS_PER_FRAME) % LOGO_FRAMES.len()];
        // Canvas y grows upwards, the baked frames grow downwards.
        let coords: Vec<(f64, f64)> = points.iter().map(|(x, y)| (*x, LOGO_HEIGHT - y)).collect();

        let [row] = Layout::vertical([Constraint::Length(Self::required_height())])
            .flex(Flex::Center)
            .areas(area);
        let [logo_area] = Layout::horizontal([Constraint::Length(Self::required_width())])
            .flex(Flex::Center)
            .areas(row);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, LOGO_WIDTH.max(1.0)])
            .y_bounds([0.0, LOGO_HEIGHT.max(1.0)])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &coords,
                    color: Color::Yellow,
                });
            });
        frame.render_widget(canvas, logo_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_frames_are_baked() {
        assert!(!LOGO_FRAMES.is_empty());
        assert!(Logo::required_height() > 1);
        assert!(Logo::required_width() > 1);
    }

    #[test]
    fn test_render_draws_braille() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| Logo::render(f, f.area(), 0))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)));
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal
            .draw(|f| Logo::render(f, f.area(), 13))
            .unwrap();
    }
}
