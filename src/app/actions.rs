//! Action vocabulary for the reducer.

use crossterm::event::KeyEvent;

use crate::tmdb::Movie;

/// Everything that can happen to the application.
///
/// The fetch lifecycle actions carry the query that produced the request so
/// the reducer can recognize completions that no longer match the newest
/// request and drop them.
#[derive(Debug, Clone)]
pub enum Action {
    /// Keyboard input.
    Key(KeyEvent),
    /// Periodic tick, used for the spinner animation.
    Tick,
    /// The search term changed to this value.
    InputChanged(String),
    /// A debounced request for this query was issued.
    FetchStarted { query: String },
    /// The request returned a non-empty result list.
    FetchSucceeded { query: String, movies: Vec<Movie> },
    /// The request returned a well-formed body with zero results, possibly
    /// with server-provided error text.
    FetchEmpty {
        query: String,
        message: Option<String>,
    },
    /// Transport failure or non-2xx status.
    FetchFailed { query: String },
    /// Move the card selection down.
    SelectNext,
    /// Move the card selection up.
    SelectPrev,
    Quit,
}
