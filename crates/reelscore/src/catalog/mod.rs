//! Mapping from provider genre ids to canonical genres and their descriptive metadata.

mod genre;
mod info;

pub use genre::{Genre, GenreId};
pub use info::GenreInfo;

use serde::Serialize;
use std::collections::BTreeMap;

/// Placeholder shown for movies whose leading genre id is not mapped.
pub const UNMAPPED_GENRE_LABEL: &str = "Cinematic Work";

const TMDB_GENRES: [(GenreId, Genre); 14] = [
    (28, Genre::Action),
    (12, Genre::Adventure),
    (16, Genre::Animation),
    (35, Genre::Comedy),
    (80, Genre::Crime),
    (99, Genre::Documentary),
    (18, Genre::Drama),
    (14, Genre::Fantasy),
    (27, Genre::Horror),
    (9648, Genre::Mystery),
    (10749, Genre::Romance),
    (878, Genre::SciFi),
    (53, Genre::Thriller),
    (37, Genre::Western),
];

/// Immutable genre lookup table, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct GenreCatalog {
    ids: BTreeMap<GenreId, Genre>,
}

/// Catalog entry as exposed over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct GenreEntry {
    pub genre: Genre,
    pub label: &'static str,
    pub provider_ids: Vec<GenreId>,
    #[serde(flatten)]
    pub info: &'static GenreInfo,
}

impl GenreCatalog {
    pub fn standard() -> Self {
        Self {
            ids: TMDB_GENRES.into_iter().collect(),
        }
    }

    /// Maps an additional provider id onto an existing canonical genre.
    pub fn with_alias(mut self, id: GenreId, genre: Genre) -> Self {
        self.ids.insert(id, genre);
        self
    }

    pub fn genre_for_id(&self, id: GenreId) -> Option<Genre> {
        self.ids.get(&id).copied()
    }

    /// First id in `genre_ids` with a mapping wins; falls back to [`Genre::DEFAULT`].
    pub fn resolve_genre(&self, genre_ids: &[GenreId]) -> Genre {
        genre_ids
            .iter()
            .find_map(|id| self.genre_for_id(*id))
            .unwrap_or(Genre::DEFAULT)
    }

    pub fn genre_info(&self, genre: Genre) -> &'static GenreInfo {
        genre.info()
    }

    /// Unknown names fall back to the default genre's entry.
    pub fn genre_info_by_name(&self, name: &str) -> &'static GenreInfo {
        Genre::from_name(name).unwrap_or(Genre::DEFAULT).info()
    }

    /// Every provider id that maps onto `genre`, ascending.
    pub fn ids_for(&self, genre: Genre) -> Vec<GenreId> {
        self.ids
            .iter()
            .filter(|(_, mapped)| **mapped == genre)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Label for list rows: only the leading id is considered.
    pub fn display_label(&self, genre_ids: &[GenreId]) -> &'static str {
        genre_ids
            .first()
            .and_then(|id| self.genre_for_id(*id))
            .map(Genre::label)
            .unwrap_or(UNMAPPED_GENRE_LABEL)
    }

    pub fn entry(&self, genre: Genre) -> GenreEntry {
        GenreEntry {
            genre,
            label: genre.label(),
            provider_ids: self.ids_for(genre),
            info: genre.info(),
        }
    }

    pub fn entries(&self) -> Vec<GenreEntry> {
        Genre::ordered()
            .into_iter()
            .map(|genre| self.entry(genre))
            .collect()
    }
}

impl Default for GenreCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
