//! Weighted rating criteria: a universal set asked for every movie plus one set per genre.

mod criterion;
mod standard;

pub use criterion::Criterion;

use crate::catalog::Genre;
use std::collections::{BTreeMap, HashSet};

/// Static question tables. Weights are authored per criterion and normalised at score time.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    universal: Vec<Criterion>,
    by_genre: BTreeMap<Genre, Vec<Criterion>>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            universal: standard::universal_criteria(),
            by_genre: Genre::ordered()
                .into_iter()
                .map(|genre| (genre, standard::genre_criteria(genre)))
                .collect(),
        }
    }

    /// Builds a custom bank. Genres missing from `by_genre` only get the universal set.
    pub fn new(
        universal: Vec<Criterion>,
        by_genre: BTreeMap<Genre, Vec<Criterion>>,
    ) -> Result<Self, QuestionBankError> {
        if universal.is_empty() {
            return Err(QuestionBankError::EmptyUniversal);
        }

        validate_list(&universal)?;
        for criteria in by_genre.values() {
            validate_list(criteria)?;
        }

        Ok(Self {
            universal,
            by_genre,
        })
    }

    pub fn universal(&self) -> &[Criterion] {
        &self.universal
    }

    pub fn genre_specific(&self, genre: Genre) -> &[Criterion] {
        self.by_genre
            .get(&genre)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Universal criteria in their defined order, followed by the genre's own list.
    pub fn build_criteria_set(&self, genre: Genre) -> Vec<Criterion> {
        let specific = self.genre_specific(genre);
        let mut criteria = Vec::with_capacity(self.universal.len() + specific.len());
        criteria.extend_from_slice(&self.universal);
        criteria.extend_from_slice(specific);
        criteria
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_list(criteria: &[Criterion]) -> Result<(), QuestionBankError> {
    let mut seen = HashSet::new();
    for criterion in criteria {
        if !(criterion.weight.is_finite() && criterion.weight > 0.0) {
            return Err(QuestionBankError::NonPositiveWeight(criterion.id));
        }
        if !seen.insert(criterion.id) {
            return Err(QuestionBankError::DuplicateId(criterion.id));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuestionBankError {
    #[error("the universal criteria list must not be empty")]
    EmptyUniversal,
    #[error("criterion '{0}' must carry a positive, finite weight")]
    NonPositiveWeight(&'static str),
    #[error("criterion id '{0}' appears more than once in the same list")]
    DuplicateId(&'static str),
}
