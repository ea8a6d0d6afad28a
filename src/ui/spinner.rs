//! Loading indicator.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for a given tick count.
pub fn glyph(tick: u64) -> &'static str {
    FRAMES[(tick as usize) % FRAMES.len()]
}

pub fn render(frame: &mut Frame, area: Rect, tick: u64) {
    let text = format!("{} Loading movies...", glyph(tick));
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
