use super::domain::{RatingOutcome, RatingSession, Selection, WorkflowState};
use crate::catalog::{Genre, GenreCatalog, GenreInfo};
use crate::provider::{CastMember, MovieId, MovieSummary};
use crate::questions::Criterion;
use serde::Serialize;

/// Serializable snapshot of the workflow, published to whatever renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WorkflowView {
    Idle,
    Previewing(PreviewView),
    Questioning(QuestionProgress),
    Result(RatingOutcome),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewView {
    pub movie: MovieSummary,
    pub genre: Genre,
    pub genre_label: &'static str,
    pub genre_info: &'static GenreInfo,
    pub release_year: Option<i32>,
    pub tagline: Option<String>,
    pub runtime: Option<u32>,
    pub top_cast: Vec<CastMember>,
    pub detail_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionProgress {
    pub movie_id: MovieId,
    pub movie_title: String,
    pub genre: Genre,
    pub index: usize,
    pub total: usize,
    pub percent_complete: u32,
    pub genre_specific: bool,
    pub criterion: Criterion,
    pub current_answer: Option<f64>,
}

impl WorkflowView {
    pub(crate) fn project(state: &WorkflowState, catalog: &GenreCatalog) -> Self {
        match state {
            WorkflowState::Idle => Self::Idle,
            WorkflowState::Previewing(selection) => {
                Self::Previewing(PreviewView::from_selection(selection, catalog))
            }
            WorkflowState::Questioning(session) => match QuestionProgress::from_session(session) {
                Some(progress) => Self::Questioning(progress),
                None => Self::Previewing(PreviewView::from_selection(&session.selection, catalog)),
            },
            WorkflowState::Result(outcome) => Self::Result(outcome.clone()),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Previewing(_) => "previewing",
            Self::Questioning(_) => "questioning",
            Self::Result(_) => "result",
        }
    }
}

impl PreviewView {
    fn from_selection(selection: &Selection, catalog: &GenreCatalog) -> Self {
        let detail = selection.detail.as_ref();
        Self {
            movie: selection.movie.clone(),
            genre: selection.genre,
            genre_label: catalog.display_label(&selection.movie.genre_ids),
            genre_info: catalog.genre_info(selection.genre),
            release_year: selection.movie.release_year(),
            tagline: detail.and_then(|d| d.tagline.clone()),
            runtime: detail.and_then(|d| d.runtime),
            top_cast: detail.map(|d| d.top_cast().to_vec()).unwrap_or_default(),
            detail_pending: selection.detail_pending,
        }
    }
}

impl QuestionProgress {
    fn from_session(session: &RatingSession) -> Option<Self> {
        let criterion = session.current()?.clone();
        let total = session.criteria.len();
        let index = session.current_index;
        let percent_complete = ((index + 1) as f64 / total as f64 * 100.0).round() as u32;

        Some(Self {
            movie_id: session.selection.movie.id,
            movie_title: session.selection.movie.title.clone(),
            genre: session.selection.genre,
            index,
            total,
            percent_complete,
            genre_specific: session.is_genre_specific(),
            current_answer: session.answers.get(criterion.id).copied(),
            criterion,
        })
    }
}
