use reqwest::StatusCode;
use tracing::debug;

use super::types::MoviePage;

/// Read-only client for the movie catalog API.
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(base_url: &str, api_key: String) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Build the request URL for a query. The empty query selects the
    /// popularity listing instead of the search endpoint.
    pub fn movie_url(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}/discover/movie?sort_by=popularity.desc", self.base_url)
        } else {
            format!(
                "{}/search/movie?query={}",
                self.base_url,
                urlencoding::encode(query)
            )
        }
    }

    /// Fetch movies matching `query`, or the popular listing when `query`
    /// is empty. A non-2xx status is an error; the body is not inspected
    /// on that path.
    pub async fn fetch_movies(&self, query: &str) -> Result<MoviePage, FetchError> {
        let url = self.movie_url(query);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let page: MoviePage = response.json().await?;
        Ok(page)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected status: {0}")]
    Status(StatusCode),
}
