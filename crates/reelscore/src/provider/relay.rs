//! Client for the internal `/api/movies` relay. Credentials never pass through here.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ProviderError;
use super::types::{MovieDetail, MovieId, MoviePage, MovieSummary};
use super::MovieProvider;
use crate::config::ProviderConfig;

const RELAY_PATH: &str = "/api/movies";

/// Upper bound on the up-front allocation for popular listings.
const PREALLOCATE_MAX: usize = 100;

#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Self::with_timeout(config.relay_base_url.clone(), config.timeout)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ProviderError::config("relay base URL must not be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn movies_url(&self) -> String {
        format!("{}{}", self.base_url, RELAY_PATH)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let response = self
            .client
            .get(self.movies_url())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MovieProvider for RelayClient {
    /// Walks popular pages until `limit` movies are collected or the listing runs out.
    async fn list_popular(&self, limit: usize) -> Result<Vec<MovieSummary>, ProviderError> {
        let mut movies = Vec::with_capacity(limit.min(PREALLOCATE_MAX));
        let mut page = 1u32;

        while movies.len() < limit {
            let batch: MoviePage = self
                .fetch(&[("page", page.to_string()), ("limit", limit.to_string())])
                .await?;
            let exhausted = batch.results.is_empty() || page >= batch.total_pages;
            movies.extend(batch.results);
            if exhausted {
                break;
            }
            page += 1;
        }

        movies.truncate(limit);
        debug!(count = movies.len(), pages = page, "loaded popular movies");
        Ok(movies)
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, ProviderError> {
        let page: MoviePage = self.fetch(&[("query", query.to_string())]).await?;
        Ok(page.results)
    }

    async fn detail(&self, movie_id: MovieId) -> Result<MovieDetail, ProviderError> {
        self.fetch(&[("movieId", movie_id.to_string())]).await
    }
}
