//! Upstream TMDB client used by the relay. It owns the API key and forwards
//! relay parameters without reshaping the response.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::error::ProviderError;
use super::types::MovieId;
use crate::config::ProviderConfig;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Query parameters accepted by `/api/movies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, rename = "movieId")]
    pub movie_id: Option<MovieId>,
    #[serde(default)]
    pub page: Option<u32>,
    /// Accepted for compatibility; the client trims listings itself.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UpstreamEndpoint {
    Detail(MovieId),
    Search(String),
    Popular,
}

impl RelayRequest {
    pub(crate) fn endpoint(&self) -> UpstreamEndpoint {
        if let Some(id) = self.movie_id {
            return UpstreamEndpoint::Detail(id);
        }
        match self.query.as_deref() {
            Some(query) if !query.is_empty() => UpstreamEndpoint::Search(query.to_string()),
            _ => UpstreamEndpoint::Popular,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_config(api_key, DEFAULT_TMDB_BASE_URL, Duration::from_secs(10))
    }

    /// `None` when no API key is configured.
    pub fn from_config(config: &ProviderConfig) -> Result<Option<Self>, ProviderError> {
        match config.tmdb_api_key.as_deref() {
            Some(key) => {
                Self::with_config(key, config.tmdb_base_url.clone(), config.timeout).map(Some)
            }
            None => Ok(None),
        }
    }

    pub fn with_config(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProviderError::config("TMDB_API_KEY is empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Forwards a relay request upstream and returns the body untouched.
    pub async fn forward(&self, request: &RelayRequest) -> Result<Value, ProviderError> {
        let mut params: Vec<(&str, String)> = vec![("api_key", self.api_key.clone())];

        let url = match request.endpoint() {
            UpstreamEndpoint::Detail(id) => {
                params.push(("append_to_response", "credits,images".to_string()));
                format!("{}/movie/{id}", self.base_url)
            }
            UpstreamEndpoint::Search(query) => {
                params.push(("query", query));
                format!("{}/search/movie", self.base_url)
            }
            UpstreamEndpoint::Popular => format!("{}/movie/popular", self.base_url),
        };

        if let Some(page) = request.page {
            params.push(("page", page.to_string()));
        }

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "tmdb upstream responded");

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_takes_precedence_over_query() {
        let request = RelayRequest {
            query: Some("heat".to_string()),
            movie_id: Some(949),
            ..RelayRequest::default()
        };
        assert_eq!(request.endpoint(), UpstreamEndpoint::Detail(949));
    }

    #[test]
    fn empty_query_falls_back_to_popular() {
        let request = RelayRequest {
            query: Some(String::new()),
            ..RelayRequest::default()
        };
        assert_eq!(request.endpoint(), UpstreamEndpoint::Popular);
        assert_eq!(RelayRequest::default().endpoint(), UpstreamEndpoint::Popular);
    }

    #[test]
    fn rejects_blank_api_key() {
        assert!(matches!(
            TmdbClient::new("   "),
            Err(ProviderError::Config(_))
        ));
    }
}
