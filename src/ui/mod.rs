//! User interface rendering.

mod card;
mod cards;
mod controls;
mod formatters;
mod status_bar;
mod theme;

pub use card::CardView;
pub use theme::ThemeColors;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    controls::draw_controls(f, app, chunks[0], &colors);
    cards::draw_cards(f, app, chunks[1], &colors);
    status_bar::draw_pagination(f, app, chunks[2], &colors);
    status_bar::draw_status(f, app, chunks[3], &colors);
    status_bar::draw_keymap(f, app, chunks[4], &colors);
}
