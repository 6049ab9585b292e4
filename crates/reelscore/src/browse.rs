//! Genre shelves built from the popular listing.

use crate::catalog::{Genre, GenreCatalog};
use crate::provider::{or_empty, MovieProvider, MovieSummary};
use serde::Serialize;
use tracing::{debug, warn};

pub const DEFAULT_SHELF_GENRES: [&str; 5] =
    ["Action", "Comedy", "Drama", "Horror", "Science Fiction"];

pub const MOVIES_PER_SHELF: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shelf {
    pub title: String,
    pub genre: Genre,
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BrowsePage {
    pub featured: Option<MovieSummary>,
    pub shelves: Vec<Shelf>,
}

/// One shelf per requested genre name, in request order. Unknown names and
/// genres with no matching movies produce no shelf.
pub fn build_shelves(
    movies: &[MovieSummary],
    catalog: &GenreCatalog,
    genre_names: &[&str],
    per_shelf: usize,
) -> Vec<Shelf> {
    genre_names
        .iter()
        .filter_map(|name| {
            let Some(genre) = Genre::from_name(name) else {
                warn!(genre = *name, "shelf genre is not in the catalog");
                return None;
            };
            let ids = catalog.ids_for(genre);
            let shelf_movies: Vec<MovieSummary> = movies
                .iter()
                .filter(|movie| movie.genre_ids.iter().any(|id| ids.contains(id)))
                .take(per_shelf)
                .cloned()
                .collect();

            if shelf_movies.is_empty() {
                debug!(genre = genre.as_str(), "no popular movies for shelf");
                return None;
            }
            Some(Shelf {
                title: (*name).to_string(),
                genre,
                movies: shelf_movies,
            })
        })
        .collect()
}

pub fn browse_page(movies: &[MovieSummary], catalog: &GenreCatalog) -> BrowsePage {
    BrowsePage {
        featured: movies.first().cloned(),
        shelves: build_shelves(movies, catalog, &DEFAULT_SHELF_GENRES, MOVIES_PER_SHELF),
    }
}

/// Loads the popular listing and arranges it. A failed listing yields an empty page.
pub async fn load_browse_page<P>(provider: &P, catalog: &GenreCatalog, limit: usize) -> BrowsePage
where
    P: MovieProvider + ?Sized,
{
    let movies = or_empty("list_popular", provider.list_popular(limit).await);
    browse_page(&movies, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, genre_ids: &[u32]) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            genre_ids: genre_ids.to_vec(),
            vote_average: 6.5,
        }
    }

    #[test]
    fn shelves_follow_request_order_and_skip_empty_genres() {
        let catalog = GenreCatalog::standard();
        let movies = vec![movie(1, &[35]), movie(2, &[28, 35]), movie(3, &[878])];

        let shelves = build_shelves(&movies, &catalog, &DEFAULT_SHELF_GENRES, MOVIES_PER_SHELF);
        let titles: Vec<&str> = shelves.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Action", "Comedy", "Science Fiction"]);
        assert_eq!(shelves[1].movies.len(), 2);
        assert_eq!(shelves[2].genre, Genre::SciFi);
    }

    #[test]
    fn shelves_are_capped_and_unknown_names_dropped() {
        let catalog = GenreCatalog::standard();
        let movies: Vec<_> = (1..=15).map(|id| movie(id, &[18])).collect();

        let shelves = build_shelves(&movies, &catalog, &["Drama", "Musical"], 10);
        assert_eq!(shelves.len(), 1);
        assert_eq!(shelves[0].movies.len(), 10);
        assert_eq!(shelves[0].movies[0].id, 1);
    }

    #[test]
    fn featured_is_first_popular_movie() {
        let catalog = GenreCatalog::standard();
        let page = browse_page(&[movie(9, &[27]), movie(4, &[27])], &catalog);
        assert_eq!(page.featured.map(|m| m.id), Some(9));

        let empty = browse_page(&[], &catalog);
        assert!(empty.featured.is_none());
        assert!(empty.shelves.is_empty());
    }
}
