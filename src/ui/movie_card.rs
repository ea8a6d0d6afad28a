//! Result cards. A card is a pure projection of a movie record onto three
//! lines of text.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tmdb::Movie;

pub fn render_grid(frame: &mut Frame, area: Rect, movies: &[Movie], selected: usize) {
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = movies
        .iter()
        .map(|movie| ListItem::new(card_lines(movie, width)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" All movies ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn card_lines(movie: &Movie, width: usize) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            meta_line(movie),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            truncate(&movie.overview, width),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// Rating, year and language with `--` placeholders for missing values.
fn meta_line(movie: &Movie) -> String {
    let rating = if movie.vote_average > 0.0 {
        format!("★ {:.1}", movie.vote_average)
    } else {
        "★ --".to_string()
    };

    let year = movie
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "--".to_string());

    let language = movie.original_language.as_deref().unwrap_or("--");

    format!("{} · {} · {}", rating, year, language)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(json: &str) -> Movie {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_card_title_line() {
        let movie = movie(r#"{"id": 1, "title": "Batman"}"#);
        let lines = card_lines(&movie, 40);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].content, "Batman");
    }

    #[test]
    fn test_meta_line_with_full_record() {
        let movie = movie(
            r#"{"id": 155, "title": "The Dark Knight", "vote_average": 8.5,
                "release_date": "2008-07-16", "original_language": "en"}"#,
        );
        assert_eq!(meta_line(&movie), "★ 8.5 · 2008 · en");
    }

    #[test]
    fn test_meta_line_with_missing_fields() {
        let movie = movie(r#"{"id": 1, "title": "Unknown"}"#);
        assert_eq!(meta_line(&movie), "★ -- · -- · --");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 20), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        let truncated = truncate("a very long overview that will not fit", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }
}
