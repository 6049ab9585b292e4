//! Trailing-edge debounced movie search.

use crate::config::SearchConfig;
use crate::provider::{or_empty, MovieProvider, MovieSummary};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(350);

/// Queries shorter than this (after trimming) never reach the provider.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub generation: u64,
    pub query: String,
    pub movies: Vec<MovieSummary>,
}

/// Collapses keystrokes into one search once input has been quiet for the
/// configured period. Only the newest input may publish results.
pub struct SearchDebouncer<P: ?Sized> {
    provider: Arc<P>,
    quiet_period: Duration,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    results: Arc<watch::Sender<SearchResults>>,
}

impl<P> SearchDebouncer<P>
where
    P: MovieProvider + ?Sized + 'static,
{
    pub fn new(provider: Arc<P>, quiet_period: Duration) -> Self {
        let (results, _) = watch::channel(SearchResults::default());
        Self {
            provider,
            quiet_period,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
            results: Arc::new(results),
        }
    }

    /// Uses the quiet period from `SEARCH_DEBOUNCE_MS`.
    pub fn from_config(provider: Arc<P>, config: &SearchConfig) -> Self {
        Self::new(provider, config.debounce)
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchResults> {
        self.results.subscribe()
    }

    pub fn latest(&self) -> SearchResults {
        self.results.borrow().clone()
    }

    /// Records a new input value and restarts the quiet period.
    pub fn input(&mut self, query: impl Into<String>) {
        let query = query.into();
        let generation = self.bump();

        let provider = Arc::clone(&self.provider);
        let current = Arc::clone(&self.generation);
        let results = Arc::clone(&self.results);
        let quiet_period = self.quiet_period;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;

            let movies = if query.trim().chars().count() < MIN_QUERY_CHARS {
                Vec::new()
            } else {
                debug!(query = %query, generation, "searching movies");
                or_empty("search", provider.search(&query).await)
            };

            if current.load(Ordering::SeqCst) != generation {
                debug!(generation, "discarding stale search response");
                return;
            }
            results.send_replace(SearchResults {
                generation,
                query,
                movies,
            });
        }));
    }

    /// Cancels any pending search and publishes an empty result set.
    pub fn clear(&mut self) {
        let generation = self.bump();
        self.results.send_replace(SearchResults {
            generation,
            ..SearchResults::default()
        });
    }

    fn bump(&mut self) -> u64 {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl<P: ?Sized> Drop for SearchDebouncer<P> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
