pub mod app;
pub mod config;
pub mod fetch;
pub mod terminal;
pub mod tmdb;
pub mod ui;

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use tracing::info;

use app::{reduce, Action, AppState, Debouncer, EventHandler};
use fetch::Fetcher;
use tmdb::TmdbClient;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Client error: {0}")]
    Client(#[from] tmdb::FetchError),
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub fn run(config: config::Config) -> Result<(), AppError> {
    let api_key = config.api_key()?;
    let client = TmdbClient::new(&config.api.base_url, api_key)?;

    info!("Using catalog at {}", config.api.base_url);

    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, rx) = mpsc::channel();

    let fetcher = Fetcher::new(runtime.handle().clone(), client, tx);
    let mut debouncer = Debouncer::new(
        runtime.handle().clone(),
        Duration::from_millis(config.ui.debounce_ms),
    );
    let events = EventHandler::new(Duration::from_millis(config.ui.tick_ms));

    let mut terminal = terminal::setup()?;
    let result = run_loop(&mut terminal, &events, &fetcher, &mut debouncer, &rx);
    terminal::restore(terminal)?;

    result
}

fn run_loop(
    terminal: &mut terminal::Tui,
    events: &EventHandler,
    fetcher: &Fetcher,
    debouncer: &mut Debouncer,
    completions: &Receiver<Action>,
) -> Result<(), AppError> {
    let mut state = AppState::new();

    // The initial popular listing goes through the same debounced path as
    // every later keystroke.
    schedule_fetch(debouncer, fetcher, String::new());

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action = events.next()?;

        let previous_term = state.search.search_term.clone();
        state = reduce(state, action);

        if state.search.search_term != previous_term {
            schedule_fetch(debouncer, fetcher, state.search.search_term.clone());
        }

        // Apply whatever the fetch tasks delivered since the last frame.
        while let Ok(completion) = completions.try_recv() {
            state = reduce(state, completion);
        }

        if state.should_quit {
            info!("Shutting down");
            return Ok(());
        }
    }
}

fn schedule_fetch(debouncer: &mut Debouncer, fetcher: &Fetcher, query: String) {
    let fetcher = fetcher.clone();
    debouncer.schedule(move || fetcher.spawn_fetch(query));
}
