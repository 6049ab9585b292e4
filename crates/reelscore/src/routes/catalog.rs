use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Genre, GenreCatalog, GenreEntry, GenreId};
use crate::error::AppError;
use crate::questions::{Criterion, QuestionBank};
use crate::scoring::{self, is_valid_answer, AnswerMap, ScoreCard};

#[derive(Debug, Clone)]
pub struct CatalogState {
    pub catalog: Arc<GenreCatalog>,
    pub bank: Arc<QuestionBank>,
}

/// Genre selection accepted by the criteria and score endpoints. A name wins
/// over provider ids; neither resolves to the default genre.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreSelector {
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub genre_ids: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    #[serde(default)]
    pub answers: AnswerMap,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriteriaResponse {
    pub genre: Genre,
    pub label: &'static str,
    pub universal_count: usize,
    pub criteria: Vec<Criterion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub genre: Genre,
    #[serde(flatten)]
    pub card: ScoreCard,
}

/// Router builder for the stateless genre, criteria and scoring endpoints.
pub fn catalog_router(catalog: Arc<GenreCatalog>, bank: Arc<QuestionBank>) -> Router {
    Router::new()
        .route("/api/v1/genres", get(list_genres))
        .route("/api/v1/genres/:name", get(genre_by_name))
        .route("/api/v1/criteria", get(criteria_for_genre))
        .route("/api/v1/score", post(score_answers))
        .with_state(CatalogState { catalog, bank })
}

pub(crate) async fn list_genres(State(state): State<CatalogState>) -> Json<Vec<GenreEntry>> {
    Json(state.catalog.entries())
}

pub(crate) async fn genre_by_name(
    State(state): State<CatalogState>,
    Path(name): Path<String>,
) -> Json<GenreEntry> {
    let genre = Genre::from_name(&name).unwrap_or(Genre::DEFAULT);
    Json(state.catalog.entry(genre))
}

pub(crate) async fn criteria_for_genre(
    State(state): State<CatalogState>,
    Query(selector): Query<GenreSelector>,
) -> Result<Json<CriteriaResponse>, AppError> {
    let ids = match selector.genre_ids.as_deref() {
        Some(raw) => parse_genre_ids(raw)?,
        None => Vec::new(),
    };
    let genre = select_genre(&state.catalog, selector.genre.as_deref(), &ids);

    Ok(Json(CriteriaResponse {
        genre,
        label: genre.label(),
        universal_count: state.bank.universal().len(),
        criteria: state.bank.build_criteria_set(genre),
    }))
}

pub(crate) async fn score_answers(
    State(state): State<CatalogState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    if let Some((id, value)) = request
        .answers
        .iter()
        .find(|(_, value)| !is_valid_answer(**value))
    {
        return Err(AppError::invalid_input(format!(
            "answer for '{id}' must be between 0 and 5 (got {value})"
        )));
    }

    let genre = select_genre(&state.catalog, request.genre.as_deref(), &request.genre_ids);
    let criteria = state.bank.build_criteria_set(genre);
    let card = scoring::score_card(&request.answers, &criteria);
    debug!(
        genre = genre.as_str(),
        answered = card.answered(),
        score = card.score,
        "scored answers"
    );

    Ok(Json(ScoreResponse { genre, card }))
}

fn select_genre(catalog: &GenreCatalog, name: Option<&str>, ids: &[GenreId]) -> Genre {
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => Genre::from_name(name).unwrap_or(Genre::DEFAULT),
        None => catalog.resolve_genre(ids),
    }
}

/// Parses a comma separated id list such as `28,12`. Blank segments are ignored.
pub(crate) fn parse_genre_ids(raw: &str) -> Result<Vec<GenreId>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<GenreId>()
                .map_err(|_| AppError::invalid_input(format!("'{segment}' is not a genre id")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!(parse_genre_ids("28, 12,,").expect("ids"), vec![28, 12]);
        assert!(parse_genre_ids("").expect("empty").is_empty());
        assert!(matches!(
            parse_genre_ids("28,action"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn name_takes_precedence_over_ids() {
        let catalog = GenreCatalog::standard();
        assert_eq!(select_genre(&catalog, Some("Horror"), &[35]), Genre::Horror);
        assert_eq!(select_genre(&catalog, Some("  "), &[35]), Genre::Comedy);
        assert_eq!(select_genre(&catalog, Some("Musical"), &[35]), Genre::Drama);
        assert_eq!(select_genre(&catalog, None, &[]), Genre::Drama);
    }
}
