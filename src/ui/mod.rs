//! Rendering. These widgets are presentational only; every decision about
//! what to show is already encoded in the state.

pub mod movie_card;
pub mod search_box;
pub mod spinner;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, ResultsView};

pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header banner
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Results area
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    search_box::render(frame, chunks[1], &state.search.search_term);
    render_results(frame, chunks[2], state);
    render_status(frame, chunks[3], state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "cinegrid",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Find movies you'll enjoy without the hassle",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.search.view() {
        ResultsView::Loading => spinner::render(frame, area, state.tick),
        ResultsView::Error(message) => {
            let paragraph = Paragraph::new(message.to_string())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
        ResultsView::Grid => {
            movie_card::render_grid(frame, area, &state.search.movie_list, state.selected)
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let count = match state.search.view() {
        ResultsView::Grid => format!("{} movies", state.search.movie_list.len()),
        _ => String::new(),
    };

    let line = Line::from(vec![
        Span::styled(count, Style::default().fg(Color::White)),
        Span::styled(
            "  ↑/↓ select · Esc quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
