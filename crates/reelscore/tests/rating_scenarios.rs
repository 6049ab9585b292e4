use std::sync::Arc;

use reelscore::catalog::{Genre, GenreCatalog};
use reelscore::provider::MovieSummary;
use reelscore::questions::QuestionBank;
use reelscore::scoring::{score, score_card, AnswerMap};
use reelscore::workflow::{RatingWorkflow, Transition, WorkflowEvent, WorkflowState, WorkflowView};

fn answers_for(bank: &QuestionBank, genre: Genre, universal: f64, specific: f64) -> AnswerMap {
    let mut answers = AnswerMap::new();
    for criterion in bank.universal() {
        answers.insert(criterion.id.to_string(), universal);
    }
    for criterion in bank.genre_specific(genre) {
        answers.insert(criterion.id.to_string(), specific);
    }
    answers
}

fn movie(id: u64, genre_ids: &[u32]) -> MovieSummary {
    MovieSummary {
        id,
        title: format!("Movie {id}"),
        overview: "A film.".to_string(),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: None,
        release_date: Some("2019-05-01".to_string()),
        genre_ids: genre_ids.to_vec(),
        vote_average: 7.1,
    }
}

#[test]
fn comedy_with_strong_genre_answers_rounds_up_to_four_and_a_half() {
    let bank = QuestionBank::standard();
    let criteria = bank.build_criteria_set(Genre::Comedy);
    let answers = answers_for(&bank, Genre::Comedy, 4.0, 5.0);

    let card = score_card(&answers, &criteria);
    assert!((card.raw - 50.5 / 11.7).abs() < 1e-9, "raw was {}", card.raw);
    assert!((card.total_weight - 11.7).abs() < 1e-9);
    assert_eq!(card.score, 4.5);
    assert_eq!(card.answered(), criteria.len());
}

#[test]
fn unanswered_sessions_score_three_for_every_genre() {
    let bank = QuestionBank::standard();
    for genre in Genre::ordered() {
        let criteria = bank.build_criteria_set(genre);
        assert_eq!(
            score(&AnswerMap::new(), &criteria),
            3.0,
            "{genre} should score neutral"
        );
    }
}

#[test]
fn scores_stay_in_range_on_half_steps() {
    let bank = QuestionBank::standard();
    let steps = [0.0, 0.5, 1.0, 2.5, 3.0, 4.5, 5.0];

    for genre in Genre::ordered() {
        let criteria = bank.build_criteria_set(genre);
        for universal in steps {
            for specific in steps {
                let answers = answers_for(&bank, genre, universal, specific);
                let value = score(&answers, &criteria);
                assert!((0.0..=5.0).contains(&value), "{genre}: {value}");
                assert_eq!((value * 2.0).fract(), 0.0, "{genre}: {value}");
                assert_eq!(score(&answers, &criteria), value);
            }
        }
    }
}

#[test]
fn criteria_order_does_not_change_the_score() {
    let bank = QuestionBank::standard();
    let criteria = bank.build_criteria_set(Genre::Thriller);
    let mut answers = AnswerMap::new();
    for (index, criterion) in criteria.iter().enumerate() {
        answers.insert(criterion.id.to_string(), (index % 6) as f64);
    }

    let forward = score_card(&answers, &criteria);
    let mut reversed = criteria.clone();
    reversed.reverse();
    let backward = score_card(&answers, &reversed);
    let mut rotated = criteria.clone();
    rotated.rotate_left(3);

    assert_eq!(forward.raw, backward.raw);
    assert_eq!(forward.score, score(&answers, &rotated));
}

#[test]
fn criteria_sets_put_universal_questions_first() {
    let bank = QuestionBank::standard();
    for genre in Genre::ordered() {
        let criteria = bank.build_criteria_set(genre);
        let universal = bank.universal();
        assert_eq!(&criteria[..universal.len()], universal);
        assert_eq!(&criteria[universal.len()..], bank.genre_specific(genre));
    }
}

#[test]
fn full_walkthrough_matches_direct_scoring() {
    let catalog = Arc::new(GenreCatalog::standard());
    let bank = Arc::new(QuestionBank::standard());
    let mut workflow = RatingWorkflow::new(Arc::clone(&catalog), Arc::clone(&bank));

    let transition = workflow
        .apply(WorkflowEvent::SelectMovie(movie(550, &[35, 18])))
        .expect("select comedy");
    assert_eq!(transition, Transition::FetchDetail(550));
    workflow.apply(WorkflowEvent::Begin).expect("begin");

    let criteria = bank.build_criteria_set(Genre::Comedy);
    let mut completed = None;
    for index in 0..criteria.len() {
        let value = if index < bank.universal().len() { 4.0 } else { 5.0 };
        match workflow.apply(WorkflowEvent::Answer(value)).expect("answer") {
            Transition::Completed(final_score) => completed = Some(final_score),
            Transition::Updated => {}
            other => panic!("unexpected transition {other:?}"),
        }
    }

    assert_eq!(completed, Some(4.5));
    match workflow.view() {
        WorkflowView::Result(outcome) => {
            assert_eq!(outcome.genre, Genre::Comedy);
            assert_eq!(outcome.movie.id, 550);
            assert_eq!(outcome.final_score, 4.5);
        }
        other => panic!("unexpected view {other:?}"),
    }

    workflow.apply(WorkflowEvent::Reset).expect("reset");
    assert_eq!(workflow.state(), &WorkflowState::Idle);
}

#[test]
fn going_back_and_changing_an_answer_replaces_it() {
    let mut workflow = RatingWorkflow::new(
        Arc::new(GenreCatalog::standard()),
        Arc::new(QuestionBank::standard()),
    );
    workflow
        .apply(WorkflowEvent::SelectMovie(movie(1, &[28])))
        .expect("select");
    workflow.apply(WorkflowEvent::Begin).expect("begin");
    workflow.apply(WorkflowEvent::Answer(1.0)).expect("first");
    workflow.apply(WorkflowEvent::Back).expect("back");

    match workflow.view() {
        WorkflowView::Questioning(progress) => {
            assert_eq!(progress.index, 0);
            assert_eq!(progress.current_answer, Some(1.0));
        }
        other => panic!("unexpected view {other:?}"),
    }

    workflow.apply(WorkflowEvent::Answer(4.0)).expect("replace");
    match workflow.state() {
        WorkflowState::Questioning(session) => {
            assert_eq!(session.current_index, 1);
            assert_eq!(session.answers.len(), 1);
            assert_eq!(session.answers.values().next(), Some(&4.0));
        }
        other => panic!("unexpected state {other:?}"),
    }
}
