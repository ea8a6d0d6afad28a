//! Application core: state, actions, reducer, debounce timer.

pub mod actions;
pub mod debounce;
pub mod event;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use event::EventHandler;
pub use reducer::{reduce, FETCH_FAILED_MESSAGE, NO_MOVIES_MESSAGE};
pub use state::{AppState, ResultsView, SearchState};
