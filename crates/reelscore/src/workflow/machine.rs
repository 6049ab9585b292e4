use super::cache::DetailCache;
use super::domain::{
    RatingOutcome, RatingSession, Selection, Transition, WorkflowError, WorkflowEvent,
    WorkflowState,
};
use super::view::WorkflowView;
use crate::catalog::GenreCatalog;
use crate::provider::{MovieDetail, MovieId, MovieSummary};
use crate::questions::QuestionBank;
use crate::scoring::{self, is_valid_answer};
use std::sync::Arc;
use tracing::{debug, info};

/// Drives one viewer through preview, questioning and result.
#[derive(Debug, Clone)]
pub struct RatingWorkflow {
    catalog: Arc<GenreCatalog>,
    bank: Arc<QuestionBank>,
    state: WorkflowState,
    cache: DetailCache,
}

impl RatingWorkflow {
    pub fn new(catalog: Arc<GenreCatalog>, bank: Arc<QuestionBank>) -> Self {
        Self {
            catalog,
            bank,
            state: WorkflowState::Idle,
            cache: DetailCache::default(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    pub fn view(&self) -> WorkflowView {
        WorkflowView::project(&self.state, &self.catalog)
    }

    pub fn apply(&mut self, event: WorkflowEvent) -> Result<Transition, WorkflowError> {
        match event {
            WorkflowEvent::SelectMovie(movie) => Ok(self.select(movie)),
            WorkflowEvent::DetailLoaded { movie_id, detail } => {
                Ok(self.attach_detail(movie_id, detail))
            }
            WorkflowEvent::Begin => self.begin(),
            WorkflowEvent::Answer(value) => self.answer(value),
            WorkflowEvent::Back => self.back(),
            WorkflowEvent::Reset => {
                if !matches!(self.state, WorkflowState::Idle) {
                    debug!(from = self.state.name(), "rating workflow reset");
                }
                self.state = WorkflowState::Idle;
                Ok(Transition::Updated)
            }
        }
    }

    fn select(&mut self, movie: MovieSummary) -> Transition {
        if let WorkflowState::Questioning(session) = &self.state {
            debug!(
                movie_id = session.selection.movie.id,
                answered = session.answers.len(),
                "discarding in-progress rating session"
            );
        }

        let movie_id = movie.id;
        let in_flight = self
            .selection()
            .is_some_and(|current| current.movie.id == movie_id && current.detail_pending);
        let genre = self.catalog.resolve_genre(&movie.genre_ids);
        let detail = self.cache.get(movie_id).cloned();
        let detail_pending = detail.is_none();

        self.state = WorkflowState::Previewing(Selection {
            movie,
            genre,
            detail,
            detail_pending,
        });

        if detail_pending && !in_flight {
            Transition::FetchDetail(movie_id)
        } else {
            Transition::Updated
        }
    }

    fn selection(&self) -> Option<&Selection> {
        match &self.state {
            WorkflowState::Previewing(selection) => Some(selection),
            WorkflowState::Questioning(session) => Some(&session.selection),
            WorkflowState::Idle | WorkflowState::Result(_) => None,
        }
    }

    fn attach_detail(&mut self, movie_id: MovieId, detail: Option<MovieDetail>) -> Transition {
        if let Some(detail) = &detail {
            self.cache.insert(detail.clone());
        }
        // A failed lookup never hides a detail that an earlier lookup cached.
        let detail = detail.or_else(|| self.cache.get(movie_id).cloned());

        let selection = match &mut self.state {
            WorkflowState::Previewing(selection) => selection,
            WorkflowState::Questioning(session) => &mut session.selection,
            WorkflowState::Idle | WorkflowState::Result(_) => return Transition::Unchanged,
        };

        if selection.movie.id != movie_id {
            debug!(
                movie_id,
                showing = selection.movie.id,
                "dropping stale movie detail"
            );
            return Transition::Unchanged;
        }

        selection.detail = detail;
        selection.detail_pending = false;
        Transition::Updated
    }

    fn begin(&mut self) -> Result<Transition, WorkflowError> {
        let selection = match &self.state {
            WorkflowState::Previewing(selection) => selection.clone(),
            other => return Err(invalid("begin", other)),
        };

        let criteria = self.bank.build_criteria_set(selection.genre);
        let universal_len = self.bank.universal().len();
        debug!(
            movie_id = selection.movie.id,
            genre = selection.genre.as_str(),
            questions = criteria.len(),
            "rating session started"
        );

        self.state =
            WorkflowState::Questioning(RatingSession::new(selection, criteria, universal_len));
        Ok(Transition::Updated)
    }

    fn answer(&mut self, value: f64) -> Result<Transition, WorkflowError> {
        let state = self.state.name();
        let WorkflowState::Questioning(session) = &mut self.state else {
            return Err(WorkflowError::InvalidTransition {
                event: "answer",
                state,
            });
        };

        if !is_valid_answer(value) {
            return Err(WorkflowError::AnswerOutOfRange(value));
        }

        let criterion_id = match session.current() {
            Some(criterion) => criterion.id,
            None => {
                return Err(WorkflowError::InvalidTransition {
                    event: "answer",
                    state,
                })
            }
        };
        session.answers.insert(criterion_id.to_string(), value);

        if !session.is_last() {
            session.current_index += 1;
            return Ok(Transition::Updated);
        }

        let final_score = scoring::score(&session.answers, &session.criteria);
        let outcome = RatingOutcome {
            movie: session.selection.movie.clone(),
            genre: session.selection.genre,
            final_score,
            answers: std::mem::take(&mut session.answers),
        };
        info!(
            movie_id = outcome.movie.id,
            genre = outcome.genre.as_str(),
            score = final_score,
            "rating completed"
        );

        self.state = WorkflowState::Result(outcome);
        Ok(Transition::Completed(final_score))
    }

    fn back(&mut self) -> Result<Transition, WorkflowError> {
        match &mut self.state {
            WorkflowState::Questioning(session) => {
                session.current_index = session.current_index.saturating_sub(1);
                Ok(Transition::Updated)
            }
            other => Err(invalid("back", other)),
        }
    }
}

fn invalid(event: &'static str, state: &WorkflowState) -> WorkflowError {
    WorkflowError::InvalidTransition {
        event,
        state: state.name(),
    }
}
