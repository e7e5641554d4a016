//! Card grid rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::card::CardView;
use super::formatters::truncate_to_width;
use super::ThemeColors;
use crate::app::App;
use crate::data::Film;

const GRID_COLUMNS: usize = 3;
const GRID_ROWS: usize = 4;

/// Draw the results area: the card grid, or one of the placeholder panels.
pub(super) fn draw_cards(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    if app.loading {
        draw_notice(f, area, colors, vec![Line::from("Loading films...")]);
        return;
    }

    if let Some(message) = &app.error_message {
        draw_error(f, message, area, colors);
        return;
    }

    let films = app.page();
    if films.is_empty() {
        draw_no_results(f, area, colors);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS])
        .split(area);

    for (row, chunk) in films.chunks(GRID_COLUMNS).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(rows[row]);

        for (col, film) in chunk.iter().enumerate() {
            draw_card(f, film, columns[col], colors);
        }
    }
}

fn draw_card(f: &mut Frame<'_>, film: &Film, area: Rect, colors: &ThemeColors) {
    let card = CardView::from_film(film);
    let width = area.width.saturating_sub(2) as usize;

    let field = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(colors.label)),
            Span::styled(
                truncate_to_width(value, width.saturating_sub(label.len())),
                Style::default().fg(colors.value),
            ),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&card.title, width),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        field("Year: ", &card.year),
        field("Director: ", &card.director),
        field("Box office: ", &card.box_office),
        field("Country: ", &card.country),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}

fn draw_no_results(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    draw_notice(
        f,
        area,
        colors,
        vec![
            Line::from(Span::styled(
                "No films found",
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Try adjusting your search or filters"),
        ],
    );
}

fn draw_error(f: &mut Frame<'_>, message: &str, area: Rect, colors: &ThemeColors) {
    draw_notice(
        f,
        area,
        colors,
        vec![
            Line::from(Span::styled(
                "Error loading data",
                Style::default()
                    .fg(colors.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(message.to_string()),
            Line::from(""),
            Line::from("Restart to try again"),
        ],
    );
}

fn draw_notice(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors, lines: Vec<Line<'_>>) {
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text));

    f.render_widget(paragraph, area);
}
