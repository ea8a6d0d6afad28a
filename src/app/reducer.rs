//! Pure reducer: `(AppState, Action) -> AppState`.
//!
//! No I/O happens here. Scheduling the debounce timer and spawning requests
//! are side effects the UI loop performs after applying an action.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::actions::Action;
use super::state::{AppState, SearchState};

/// Message shown when the request itself fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies. Please try again later.";

/// Message shown when a well-formed response matches nothing and carries no
/// error text of its own.
pub const NO_MOVIES_MESSAGE: &str = "No movies found.";

pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::Key(key) => handle_key(state, key),

        Action::Tick => AppState {
            tick: state.tick.wrapping_add(1),
            ..state
        },

        Action::InputChanged(term) => AppState {
            search: SearchState {
                search_term: term,
                ..state.search
            },
            ..state
        },

        Action::FetchStarted { query } => AppState {
            search: SearchState {
                is_loading: true,
                error_message: None,
                in_flight: Some(query),
                ..state.search
            },
            ..state
        },

        Action::FetchSucceeded { query, movies } => {
            if !matches_in_flight(&state, &query) {
                return state;
            }
            AppState {
                selected: 0,
                search: SearchState {
                    is_loading: false,
                    error_message: None,
                    movie_list: movies,
                    in_flight: None,
                    ..state.search
                },
                ..state
            }
        }

        Action::FetchEmpty { query, message } => {
            if !matches_in_flight(&state, &query) {
                return state;
            }
            AppState {
                selected: 0,
                search: SearchState {
                    is_loading: false,
                    error_message: Some(message.unwrap_or_else(|| NO_MOVIES_MESSAGE.to_string())),
                    movie_list: Vec::new(),
                    in_flight: None,
                    ..state.search
                },
                ..state
            }
        }

        Action::FetchFailed { query } => {
            if !matches_in_flight(&state, &query) {
                return state;
            }
            // The result list is deliberately left as-is here. Only the
            // zero-results path clears it.
            AppState {
                search: SearchState {
                    is_loading: false,
                    error_message: Some(FETCH_FAILED_MESSAGE.to_string()),
                    in_flight: None,
                    ..state.search
                },
                ..state
            }
        }

        Action::SelectNext => {
            let max = state.search.movie_list.len().saturating_sub(1);
            AppState {
                selected: (state.selected + 1).min(max),
                ..state
            }
        }

        Action::SelectPrev => AppState {
            selected: state.selected.saturating_sub(1),
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },
    }
}

/// A completion only counts when its tag still matches the newest request.
fn matches_in_flight(state: &AppState, query: &str) -> bool {
    state.search.in_flight.as_deref() == Some(query)
}

/// Map keys to actions. Release and repeat events are ignored.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    if key.kind != KeyEventKind::Press {
        return state;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            reduce(state, Action::Quit)
        }
        (KeyCode::Up, _) => reduce(state, Action::SelectPrev),
        (KeyCode::Down, _) => reduce(state, Action::SelectNext),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            reduce(state, Action::InputChanged(String::new()))
        }
        (KeyCode::Backspace, _) => {
            let mut term = state.search.search_term.clone();
            term.pop();
            reduce(state, Action::InputChanged(term))
        }
        (KeyCode::Char(c), modifiers)
            if !modifiers.contains(KeyModifiers::CONTROL)
                && !modifiers.contains(KeyModifiers::ALT) =>
        {
            let mut term = state.search.search_term.clone();
            term.push(c);
            reduce(state, Action::InputChanged(term))
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::Movie;

    fn movie(id: i64, title: &str) -> Movie {
        serde_json::from_str(&format!(r#"{{"id": {}, "title": "{}"}}"#, id, title)).unwrap()
    }

    fn started(state: AppState, query: &str) -> AppState {
        reduce(
            state,
            Action::FetchStarted {
                query: query.to_string(),
            },
        )
    }

    #[test]
    fn test_fetch_started_sets_loading_and_clears_error() {
        let mut state = AppState::new();
        state.search.error_message = Some("old error".to_string());

        let state = started(state, "batman");
        assert!(state.search.is_loading);
        assert!(state.search.error_message.is_none());
        assert_eq!(state.search.in_flight.as_deref(), Some("batman"));
    }

    #[test]
    fn test_success_stores_results_and_finishes_loading() {
        let state = started(AppState::new(), "batman");
        let state = reduce(
            state,
            Action::FetchSucceeded {
                query: "batman".to_string(),
                movies: vec![movie(1, "Batman")],
            },
        );

        assert!(!state.search.is_loading);
        assert!(state.search.error_message.is_none());
        assert_eq!(state.search.movie_list.len(), 1);
        assert_eq!(state.search.movie_list[0].title, "Batman");
        assert!(state.search.in_flight.is_none());
    }

    #[test]
    fn test_empty_result_uses_server_message() {
        let state = started(AppState::new(), "zzz");
        let state = reduce(
            state,
            Action::FetchEmpty {
                query: "zzz".to_string(),
                message: Some("X".to_string()),
            },
        );

        assert_eq!(state.search.error_message.as_deref(), Some("X"));
        assert!(state.search.movie_list.is_empty());
        assert!(!state.search.is_loading);
    }

    #[test]
    fn test_empty_result_falls_back_to_default_message() {
        let mut state = started(AppState::new(), "zzz");
        state.search.movie_list = vec![movie(1, "Leftover")];

        let state = reduce(
            state,
            Action::FetchEmpty {
                query: "zzz".to_string(),
                message: None,
            },
        );

        assert_eq!(state.search.error_message.as_deref(), Some(NO_MOVIES_MESSAGE));
        assert!(state.search.movie_list.is_empty());
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let mut state = started(AppState::new(), "batman");
        state.search.movie_list = vec![movie(1, "Batman")];

        let state = reduce(
            state,
            Action::FetchFailed {
                query: "batman".to_string(),
            },
        );

        assert_eq!(state.search.error_message.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(state.search.movie_list.len(), 1);
        assert!(!state.search.is_loading);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        // "bat" is superseded by "batman" before it completes.
        let state = started(AppState::new(), "bat");
        let state = started(state, "batman");

        let state = reduce(
            state,
            Action::FetchSucceeded {
                query: "bat".to_string(),
                movies: vec![movie(1, "Batman Begins")],
            },
        );

        assert!(state.search.movie_list.is_empty());
        assert!(state.search.is_loading);
        assert_eq!(state.search.in_flight.as_deref(), Some("batman"));
    }

    #[test]
    fn test_completion_after_newer_one_is_discarded() {
        let state = started(AppState::new(), "batman");
        let state = reduce(
            state,
            Action::FetchSucceeded {
                query: "batman".to_string(),
                movies: vec![movie(1, "Batman")],
            },
        );

        // A leftover completion from an older cycle arrives afterwards.
        let state = reduce(
            state,
            Action::FetchFailed {
                query: "bat".to_string(),
            },
        );

        assert!(state.search.error_message.is_none());
        assert_eq!(state.search.movie_list.len(), 1);
    }

    #[test]
    fn test_typing_updates_search_term() {
        let state = reduce(
            AppState::new(),
            Action::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE)),
        );
        let state = reduce(
            state,
            Action::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
        );
        assert_eq!(state.search.search_term, "ba");

        let state = reduce(
            state,
            Action::Key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        );
        assert_eq!(state.search.search_term, "b");
    }

    #[test]
    fn test_selection_resets_and_clamps() {
        let state = started(AppState::new(), "batman");
        let mut state = reduce(
            state,
            Action::FetchSucceeded {
                query: "batman".to_string(),
                movies: vec![movie(1, "Batman"), movie(2, "Batman Returns")],
            },
        );
        assert_eq!(state.selected, 0);

        state = reduce(state, Action::SelectNext);
        state = reduce(state, Action::SelectNext);
        assert_eq!(state.selected, 1);

        state = reduce(state, Action::SelectPrev);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_quit_keys() {
        let state = reduce(
            AppState::new(),
            Action::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        );
        assert!(state.should_quit);

        let state = reduce(
            AppState::new(),
            Action::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(state.should_quit);
    }
}
