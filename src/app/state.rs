//! Application state. All transitions happen through the reducer.

use crate::tmdb::Movie;

/// Root state owned by the UI loop.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub should_quit: bool,
    /// Frame counter advanced on every tick, drives the spinner.
    pub tick: u64,
    /// Selected card in the result grid.
    pub selected: usize,
    pub search: SearchState,
}

/// Search controller state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub search_term: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub movie_list: Vec<Movie>,
    /// Query tag of the newest request still in flight. Completions carrying
    /// a different tag are discarded by the reducer.
    pub in_flight: Option<String>,
}

/// What the results area shows. The loading indicator wins over everything,
/// and an error message wins over a result list left from an earlier fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView<'a> {
    Loading,
    Error(&'a str),
    Grid,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchState {
    pub fn view(&self) -> ResultsView<'_> {
        if self.is_loading {
            ResultsView::Loading
        } else if let Some(ref message) = self.error_message {
            ResultsView::Error(message)
        } else {
            ResultsView::Grid
        }
    }
}
