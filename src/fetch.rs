//! Bridge between the synchronous UI loop and the async catalog client.
//!
//! Requests run as detached tasks on the runtime and report back through a
//! channel as actions. A task that has started always runs to completion;
//! superseded completions are recognized by their query tag and dropped by
//! the reducer.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::app::Action;
use crate::tmdb::{FetchError, MoviePage, TmdbClient};

#[derive(Clone)]
pub struct Fetcher {
    handle: Handle,
    client: Arc<TmdbClient>,
    tx: Sender<Action>,
}

impl Fetcher {
    pub fn new(handle: Handle, client: TmdbClient, tx: Sender<Action>) -> Self {
        Self {
            handle,
            client: Arc::new(client),
            tx,
        }
    }

    /// Issue a request for `query` on the runtime. Sends `FetchStarted`
    /// immediately and exactly one completion action when the request
    /// finishes. Send failures mean the UI loop is gone and are ignored.
    pub fn spawn_fetch(&self, query: String) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let _ = tx.send(Action::FetchStarted {
                query: query.clone(),
            });

            let result = client.fetch_movies(&query).await;
            let _ = tx.send(completion_action(query, result));
        });
    }
}

/// Map a request outcome onto its completion action.
fn completion_action(query: String, result: Result<MoviePage, FetchError>) -> Action {
    match result {
        Ok(page) if page.results.is_empty() => {
            debug!("no results for {:?}", query);
            Action::FetchEmpty {
                query,
                message: page.error,
            }
        }
        Ok(page) => {
            debug!("{} results for {:?}", page.results.len(), query);
            Action::FetchSucceeded {
                query,
                movies: page.results,
            }
        }
        Err(e) => {
            warn!("fetch for {:?} failed: {}", query, e);
            Action::FetchFailed { query }
        }
    }
}
