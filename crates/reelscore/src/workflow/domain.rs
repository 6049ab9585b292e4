use crate::catalog::Genre;
use crate::provider::{MovieDetail, MovieId, MovieSummary};
use crate::questions::Criterion;
use crate::scoring::AnswerMap;
use serde::Serialize;
use std::fmt;

/// The movie currently on screen plus whatever detail has arrived for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub movie: MovieSummary,
    pub genre: Genre,
    pub detail: Option<MovieDetail>,
    pub detail_pending: bool,
}

/// Ephemeral state for one movie evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSession {
    pub selection: Selection,
    pub criteria: Vec<Criterion>,
    pub universal_len: usize,
    pub answers: AnswerMap,
    pub current_index: usize,
}

impl RatingSession {
    pub(crate) fn new(selection: Selection, criteria: Vec<Criterion>, universal_len: usize) -> Self {
        Self {
            selection,
            criteria,
            universal_len,
            answers: AnswerMap::new(),
            current_index: 0,
        }
    }

    pub fn current(&self) -> Option<&Criterion> {
        self.criteria.get(self.current_index)
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.criteria.len()
    }

    pub fn is_genre_specific(&self) -> bool {
        self.current_index >= self.universal_len
    }
}

/// Final state of a completed evaluation. The score is never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingOutcome {
    pub movie: MovieSummary,
    pub genre: Genre,
    pub final_score: f64,
    pub answers: AnswerMap,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    Previewing(Selection),
    Questioning(RatingSession),
    Result(RatingOutcome),
}

impl WorkflowState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Previewing(_) => "previewing",
            Self::Questioning(_) => "questioning",
            Self::Result(_) => "result",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEvent {
    SelectMovie(MovieSummary),
    /// `None` means the detail fetch failed.
    DetailLoaded {
        movie_id: MovieId,
        detail: Option<MovieDetail>,
    },
    Begin,
    Answer(f64),
    Back,
    Reset,
}

impl WorkflowEvent {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectMovie(_) => "select_movie",
            Self::DetailLoaded { .. } => "detail_loaded",
            Self::Begin => "begin",
            Self::Answer(_) => "answer",
            Self::Back => "back",
            Self::Reset => "reset",
        }
    }
}

/// What the driver has to do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Updated,
    /// State untouched, e.g. a detail response for a movie no longer on screen.
    Unchanged,
    FetchDetail(MovieId),
    Completed(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowError {
    InvalidTransition {
        event: &'static str,
        state: &'static str,
    },
    AnswerOutOfRange(f64),
    RuntimeClosed,
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::InvalidTransition { event, state } => {
                write!(f, "event '{}' is not valid while {}", event, state)
            }
            WorkflowError::AnswerOutOfRange(value) => {
                write!(f, "answer {} is outside the 0-5 range", value)
            }
            WorkflowError::RuntimeClosed => write!(f, "rating workflow runtime has stopped"),
        }
    }
}

impl std::error::Error for WorkflowError {}
