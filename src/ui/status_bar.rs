//! Status, pagination and keymap bar UI components.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::ThemeColors;
use crate::app::App;

/// Draw the pagination bar with boundary-aware prev/next hints.
pub(super) fn draw_pagination(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let total = app.total_pages();
    let prev_style = if app.current_page > 1 {
        Style::default().fg(colors.text)
    } else {
        Style::default().fg(colors.disabled)
    };
    let next_style = if app.current_page < total {
        Style::default().fg(colors.text)
    } else {
        Style::default().fg(colors.disabled)
    };

    let line = Line::from(vec![
        Span::styled("◀ prev", prev_style),
        Span::styled(
            format!("  Page {} of {}  ", app.current_page, total),
            Style::default().fg(colors.heading),
        ),
        Span::styled("next ▶", next_style),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors.bg));

    f.render_widget(paragraph, area);
}

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let text = if app.search.is_editing() {
        format!("/{}", app.search.buffer())
    } else {
        app.status.clone()
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let keymap_text = if app.search.is_editing() {
        "Enter:search | Esc:cancel | Type to search"
    } else {
        "q:quit | /:search | y/Y:year | c/C:country | s/S:sort | h/l:page | r:reset | T:theme | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
