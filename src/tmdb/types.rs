use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// A movie record as returned by the catalog API.
///
/// Only the fields the card grid displays are deserialized; everything else
/// in the record is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    /// Release year parsed from the `YYYY-MM-DD` date string, if present.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// Response envelope shared by the search and discover endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub results: Vec<Movie>,
    /// Error text some responses carry alongside an empty result list.
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie_page() {
        let body = r#"{
            "page": 1,
            "results": [
                {
                    "id": 155,
                    "title": "The Dark Knight",
                    "overview": "Batman raises the stakes in his war on crime.",
                    "vote_average": 8.5,
                    "release_date": "2008-07-16",
                    "original_language": "en",
                    "poster_path": "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
                    "popularity": 123.4
                }
            ],
            "total_pages": 1
        }"#;

        let page: MoviePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 1);
        assert!(page.error.is_none());

        let movie = &page.results[0];
        assert_eq!(movie.id, 155);
        assert_eq!(movie.title, "The Dark Knight");
        assert_eq!(movie.release_year(), Some(2008));
    }

    #[test]
    fn test_parse_page_without_results_field() {
        let page: MoviePage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
        assert!(page.error.is_none());
    }

    #[test]
    fn test_parse_page_with_error_field() {
        let page: MoviePage =
            serde_json::from_str(r#"{"results": [], "Error": "Nothing matched."}"#).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.error.as_deref(), Some("Nothing matched."));
    }

    #[test]
    fn test_release_year_handles_bad_dates() {
        let mut movie: Movie = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(movie.release_year(), None);

        movie.release_date = Some("".to_string());
        assert_eq!(movie.release_year(), None);

        movie.release_date = Some("1999-03-31".to_string());
        assert_eq!(movie.release_year(), Some(1999));
    }
}
