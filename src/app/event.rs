//! Terminal event polling for the UI loop.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent};

use super::actions::Action;

/// Polls crossterm for input, falling back to a tick when the terminal is
/// quiet for a full tick interval.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Block up to the tick interval for the next event.
    pub fn next(&self) -> std::io::Result<Action> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Action::Key(key)),
                // Resize is handled by the next draw; everything else only
                // advances the spinner.
                _ => Ok(Action::Tick),
            }
        } else {
            Ok(Action::Tick)
        }
    }
}
