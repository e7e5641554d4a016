//! Filter and sort controls bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::ThemeColors;
use crate::app::App;

/// Draw the controls bar: search box, year, country and sort selections.
pub(super) fn draw_controls(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let label = Style::default().fg(colors.label);
    let value = Style::default().fg(colors.value);

    // While the search box has focus, show the live buffer with a cursor
    // mark and highlight it.
    let search_span = if app.search.is_editing() {
        Span::styled(
            format!("{}▏", app.search.buffer()),
            Style::default()
                .fg(colors.select_fg)
                .bg(colors.select_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else if app.search.query().is_empty() {
        Span::styled("-", Style::default().fg(colors.disabled))
    } else {
        Span::styled(app.search.query().to_string(), value)
    };

    let line = Line::from(vec![
        Span::styled("Search: ", label),
        search_span,
        Span::styled("   Year: ", label),
        Span::styled(app.year_label(), value),
        Span::styled("   Country: ", label),
        Span::styled(app.country_label().to_string(), value),
        Span::styled("   Sort: ", label),
        Span::styled(app.sort.label(), value),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Filters ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}
