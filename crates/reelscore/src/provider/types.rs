use crate::catalog::GenreId;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

pub type MovieId = u64;

/// Number of billed cast members surfaced next to a movie.
pub const TOP_CAST: usize = 6;

/// Listing/search row as returned by the provider. Every field but `id` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre_ids: Vec<GenreId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
}

impl MovieSummary {
    pub fn release_year(&self) -> Option<i32> {
        parse_release_year(self.release_date.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreRef {
    pub id: GenreId,
    #[serde(default)]
    pub name: String,
}

/// Extended record for a single movie, including billed cast when credits were appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: MovieId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<GenreRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub credits: Credits,
}

impl MovieDetail {
    /// Billed cast in credit order, capped at [`TOP_CAST`].
    pub fn top_cast(&self) -> &[CastMember] {
        let end = self.credits.cast.len().min(TOP_CAST);
        &self.credits.cast[..end]
    }

    pub fn release_year(&self) -> Option<i32> {
        parse_release_year(self.release_date.as_deref())
    }
}

/// One page of a listing or search response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoviePage {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<MovieSummary>,
    #[serde(default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

fn parse_release_year(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok())
        .map(|date| date.year())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_tolerates_missing_and_null_fields() {
        let summary: MovieSummary = serde_json::from_value(json!({
            "id": 603,
            "title": "The Matrix",
            "overview": null,
            "genre_ids": null,
            "release_date": ""
        }))
        .expect("summary parses");

        assert_eq!(summary.title, "The Matrix");
        assert!(summary.overview.is_empty());
        assert!(summary.genre_ids.is_empty());
        assert_eq!(summary.vote_average, 0.0);
        assert_eq!(summary.release_year(), None);
    }

    #[test]
    fn detail_exposes_top_billed_cast() {
        let cast: Vec<_> = (1..=9)
            .map(|id| json!({ "id": id, "name": format!("Actor {id}"), "character": "Someone" }))
            .collect();
        let detail: MovieDetail = serde_json::from_value(json!({
            "id": 27205,
            "title": "Inception",
            "release_date": "2010-07-15",
            "runtime": 148,
            "genres": [{ "id": 28, "name": "Action" }],
            "credits": { "cast": cast }
        }))
        .expect("detail parses");

        assert_eq!(detail.top_cast().len(), TOP_CAST);
        assert_eq!(detail.top_cast()[0].name, "Actor 1");
        assert_eq!(detail.release_year(), Some(2010));
    }

    #[test]
    fn page_defaults_when_paging_fields_are_missing() {
        let page: MoviePage =
            serde_json::from_value(json!({ "results": [{ "id": 1 }] })).expect("page parses");
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.results.len(), 1);
    }
}
