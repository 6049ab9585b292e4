//! Movie lookup provider: the only collaborator that touches the network.

mod error;
pub mod relay;
pub mod tmdb;
mod types;

pub use error::ProviderError;
pub use relay::RelayClient;
pub use tmdb::{RelayRequest, TmdbClient};
pub use types::{
    CastMember, Credits, GenreRef, MovieDetail, MovieId, MoviePage, MovieSummary, TOP_CAST,
};

use async_trait::async_trait;
use tracing::warn;

/// Lookups consumed by the rating workflow, search box and browse shelves.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    async fn list_popular(&self, limit: usize) -> Result<Vec<MovieSummary>, ProviderError>;
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, ProviderError>;
    async fn detail(&self, movie_id: MovieId) -> Result<MovieDetail, ProviderError>;
}

/// Replaces a failed list lookup with an empty list.
pub(crate) fn or_empty<T>(operation: &'static str, result: Result<Vec<T>, ProviderError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            warn!(operation, code = err.code(), error = %err, "movie lookup failed; showing no results");
            Vec::new()
        }
    }
}
