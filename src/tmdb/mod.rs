pub mod client;
pub mod types;

pub use client::{FetchError, TmdbClient};
pub use types::{Movie, MoviePage};
