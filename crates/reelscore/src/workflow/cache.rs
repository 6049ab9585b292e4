use crate::provider::{MovieDetail, MovieId};
use std::collections::HashMap;

/// Per-session movie detail cache. Grows without eviction.
#[derive(Debug, Clone, Default)]
pub struct DetailCache {
    entries: HashMap<MovieId, MovieDetail>,
}

impl DetailCache {
    pub fn get(&self, movie_id: MovieId) -> Option<&MovieDetail> {
        self.entries.get(&movie_id)
    }

    pub fn insert(&mut self, detail: MovieDetail) {
        self.entries.insert(detail.id, detail);
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.entries.contains_key(&movie_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
