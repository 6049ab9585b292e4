//! Weighted-average scoring rounded to the nearest half star.

use crate::questions::Criterion;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Criterion id to answer on the 0..=5 scale.
pub type AnswerMap = BTreeMap<String, f64>;

/// Value substituted for criteria without a recorded answer.
pub const NEUTRAL_ANSWER: f64 = 3.0;
pub const MIN_ANSWER: f64 = 0.0;
pub const MAX_ANSWER: f64 = 5.0;

/// Contribution of one criterion, kept so a score can be audited after the fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub criterion_id: &'static str,
    pub answer: f64,
    pub weight: f64,
    pub defaulted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub score: f64,
    pub raw: f64,
    pub total_weight: f64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreCard {
    fn empty() -> Self {
        Self {
            score: 0.0,
            raw: 0.0,
            total_weight: 0.0,
            components: Vec::new(),
        }
    }

    pub fn answered(&self) -> usize {
        self.components.iter().filter(|c| !c.defaulted).count()
    }
}

pub fn is_valid_answer(value: f64) -> bool {
    value.is_finite() && (MIN_ANSWER..=MAX_ANSWER).contains(&value)
}

/// Final star rating for `answers` over the ordered `criteria`.
pub fn score(answers: &AnswerMap, criteria: &[Criterion]) -> f64 {
    score_card(answers, criteria).score
}

pub fn score_card(answers: &AnswerMap, criteria: &[Criterion]) -> ScoreCard {
    if criteria.is_empty() {
        warn!("scoring requested with an empty criteria list; returning 0");
        return ScoreCard::empty();
    }

    let components: Vec<ScoreComponent> = criteria
        .iter()
        .map(|criterion| {
            let (answer, defaulted) = match answers.get(criterion.id) {
                Some(value) => (*value, false),
                None => (NEUTRAL_ANSWER, true),
            };
            ScoreComponent {
                criterion_id: criterion.id,
                answer,
                weight: criterion.weight,
                defaulted,
            }
        })
        .collect();

    let (weighted_sum, total_weight) = canonical_sums(&components);
    if total_weight <= 0.0 || !total_weight.is_finite() {
        warn!(total_weight, "criteria carry no usable weight; returning 0");
        return ScoreCard::empty();
    }

    let raw = weighted_sum / total_weight;

    ScoreCard {
        score: round_to_half(raw),
        raw,
        total_weight,
        components,
    }
}

/// Rounds to the nearest 0.5, halves going up.
pub fn round_to_half(raw: f64) -> f64 {
    (raw * 2.0 + 0.5).floor() / 2.0
}

// Summation runs over (weight, answer) pairs in sorted order so the float result does not
// depend on how the caller ordered the criteria.
fn canonical_sums(components: &[ScoreComponent]) -> (f64, f64) {
    let mut pairs: Vec<(f64, f64)> = components
        .iter()
        .map(|component| (component.weight, component.answer))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    pairs
        .iter()
        .fold((0.0, 0.0), |(sum, weight_total), (weight, answer)| {
            (sum + answer * weight, weight_total + weight)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> Vec<Criterion> {
        vec![
            Criterion::new("a", "A?", 1.2, &[]),
            Criterion::new("b", "B?", 0.9, &[]),
            Criterion::new("c", "C?", 1.5, &[]),
            Criterion::new("d", "D?", 0.8, &[]),
        ]
    }

    fn answers(pairs: &[(&str, f64)]) -> AnswerMap {
        pairs
            .iter()
            .map(|(id, value)| (id.to_string(), *value))
            .collect()
    }

    #[test]
    fn empty_criteria_scores_zero() {
        assert_eq!(score(&answers(&[("a", 5.0)]), &[]), 0.0);
    }

    #[test]
    fn missing_answers_default_to_neutral() {
        let card = score_card(&AnswerMap::new(), &criteria());
        assert_eq!(card.score, 3.0);
        assert!(card.components.iter().all(|c| c.defaulted));
        assert_eq!(card.answered(), 0);
    }

    #[test]
    fn equal_weights_with_no_answers_is_exactly_three() {
        let equal = vec![
            Criterion::new("a", "A?", 1.1, &[]),
            Criterion::new("b", "B?", 1.1, &[]),
            Criterion::new("c", "C?", 1.1, &[]),
        ];
        let card = score_card(&AnswerMap::new(), &equal);
        assert_eq!(card.score, 3.0);
        assert!((card.raw - 3.0).abs() < 1e-12);
    }

    #[test]
    fn explicit_zero_is_a_real_answer() {
        let single = vec![Criterion::new("a", "A?", 1.0, &[])];
        let card = score_card(&answers(&[("a", 0.0)]), &single);
        assert_eq!(card.score, 0.0);
        assert!(!card.components[0].defaulted);
    }

    #[test]
    fn weighted_mean_rounds_to_nearest_half() {
        // (5*1.2 + 1*0.9 + 4*1.5 + 2*0.8) / 4.4 = 14.5 / 4.4 = 3.295..
        let card = score_card(
            &answers(&[("a", 5.0), ("b", 1.0), ("c", 4.0), ("d", 2.0)]),
            &criteria(),
        );
        assert!((card.raw - 14.5 / 4.4).abs() < 1e-12);
        assert_eq!(card.score, 3.5);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_to_half(3.25), 3.5);
        assert_eq!(round_to_half(3.2499), 3.0);
        assert_eq!(round_to_half(4.75), 5.0);
        assert_eq!(round_to_half(0.0), 0.0);
    }

    #[test]
    fn result_is_independent_of_criteria_order() {
        let values = answers(&[("a", 4.5), ("b", 0.5), ("c", 3.0), ("d", 2.5)]);
        let forward = criteria();
        let mut reversed = criteria();
        reversed.reverse();
        let mut rotated = criteria();
        rotated.rotate_left(2);

        let expected = score_card(&values, &forward);
        assert_eq!(score_card(&values, &reversed).raw, expected.raw);
        assert_eq!(score_card(&values, &rotated).raw, expected.raw);
        assert_eq!(score(&values, &rotated), expected.score);
    }

    #[test]
    fn scores_stay_on_half_steps_within_range() {
        let steps: Vec<f64> = (0..=10).map(|step| step as f64 / 2.0).collect();
        for a in &steps {
            for c in &steps {
                let values = answers(&[("a", *a), ("c", *c), ("d", 5.0 - *a)]);
                let result = score(&values, &criteria());
                assert!((0.0..=5.0).contains(&result), "{result} out of range");
                assert_eq!((result * 2.0).fract(), 0.0, "{result} not a half step");
                assert_eq!(result, score(&values, &criteria()));
            }
        }
    }

    #[test]
    fn answer_validation_bounds() {
        assert!(is_valid_answer(0.0));
        assert!(is_valid_answer(5.0));
        assert!(is_valid_answer(2.75));
        assert!(!is_valid_answer(-0.5));
        assert!(!is_valid_answer(5.5));
        assert!(!is_valid_answer(f64::NAN));
    }
}
