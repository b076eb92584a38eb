use std::collections::BTreeMap;

use sasang_core::models::constitution::{Category, Constitution, ConstitutionScores};
use sasang_instruments::Instrument;
use sasang_instruments::instruments::qsccii::Qsccii;
use sasang_instruments::questionnaire::{completeness, score_questionnaire};
use sasang_instruments::scoring::{
    AnswerOption, CategoryWeights, Question, QuestionBank, Response, WeightRow,
};

fn option(value: u8, points: &[(Constitution, u8)]) -> AnswerOption {
    AnswerOption {
        value,
        text: format!("option {value}"),
        constitutions: points.iter().copied().collect::<BTreeMap<_, _>>(),
    }
}

fn question(id: u32, category: Category, options: Vec<AnswerOption>) -> Question {
    Question {
        id,
        category,
        prompt: format!("question {id}"),
        options,
    }
}

fn personality_bank() -> QuestionBank {
    QuestionBank::new(
        (1..=4)
            .map(|id| {
                question(
                    id,
                    Category::Personality,
                    vec![
                        option(1, &[(Constitution::Soyang, 3)]),
                        option(2, &[(Constitution::Taeeum, 3)]),
                    ],
                )
            })
            .collect(),
    )
}

fn even_personality_weights() -> CategoryWeights {
    let row = WeightRow {
        body: 0.2,
        personality: 0.5,
        symptoms: 0.2,
        preferences: 0.1,
    };
    CategoryWeights {
        soyang: row,
        taeeum: row,
        ..CategoryWeights::default()
    }
}

#[test]
fn confidence_is_relative_lead_over_runner_up() {
    let responses = [
        Response::new(1, 1),
        Response::new(2, 1),
        Response::new(3, 1),
        Response::new(4, 2),
    ];
    let result = score_questionnaire(&responses, &personality_bank(), &even_personality_weights());

    assert_eq!(result.final_constitution, Constitution::Soyang);
    assert!((result.category_scores.personality.soyang - 0.75).abs() < 1e-12);
    assert!((result.category_scores.personality.taeeum - 0.25).abs() < 1e-12);
    assert!((result.scores.soyang - 0.375).abs() < 1e-12);
    assert!((result.scores.taeeum - 0.125).abs() < 1e-12);
    assert!((result.confidence_score - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn empty_responses_give_zero_scores_and_default_winner() {
    let qsccii = Qsccii;
    let result = qsccii.score(&[]);

    assert_eq!(result.scores, ConstitutionScores::zero());
    for category in Category::ALL {
        assert_eq!(result.category_scores.get(category), &ConstitutionScores::zero());
    }
    assert_eq!(result.final_constitution, Constitution::Taeyang);
    assert_eq!(result.confidence_score, 0.0);
    assert_eq!(completeness(&[], qsccii.questions()).percent, 0.0);
}

#[test]
fn unknown_questions_and_options_are_ignored() {
    let qsccii = Qsccii;
    let noisy = [Response::new(999, 1), Response::new(1, 9)];

    assert_eq!(qsccii.score(&noisy), qsccii.score(&[]));
    assert_eq!(completeness(&noisy, qsccii.questions()).answered, 0);
}

#[test]
fn single_answer_normalizes_by_max_points() {
    // Q1 option 5 awards taeeum 3 of a possible 3.
    let result = Qsccii.score(&[Response::new(1, 5)]);

    assert_eq!(result.category_scores.body.taeeum, 1.0);
    assert!((result.scores.taeeum - 0.4).abs() < 1e-12);
    assert_eq!(result.scores.soyang, 0.0);
    assert_eq!(result.final_constitution, Constitution::Taeeum);
    assert_eq!(result.confidence_score, 1.0);
}

#[test]
fn last_duplicate_answer_counts() {
    let qsccii = Qsccii;
    let duplicated = qsccii.score(&[Response::new(1, 1), Response::new(1, 5)]);
    let single = qsccii.score(&[Response::new(1, 5)]);
    assert_eq!(duplicated, single);
}

#[test]
fn full_questionnaire_stays_in_unit_range() {
    let qsccii = Qsccii;
    for value in 1..=5 {
        let responses: Vec<_> = qsccii
            .questions()
            .questions
            .iter()
            .map(|q| Response::new(q.id, value))
            .collect();
        let result = qsccii.score(&responses);

        for (_, score) in result.scores.iter() {
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
        assert_eq!(result.final_constitution, result.scores.primary());
        assert!((0.0..=1.0).contains(&result.confidence_score));
        assert_eq!(completeness(&responses, qsccii.questions()).percent, 100.0);
    }
}

#[test]
fn scoring_is_deterministic() {
    let qsccii = Qsccii;
    let responses = [
        Response::new(2, 4),
        Response::new(7, 2),
        Response::new(12, 5),
        Response::new(17, 1),
    ];
    let first = qsccii.score(&responses);
    let second = qsccii.score(&responses);

    for ((_, a), (_, b)) in first.scores.iter().zip(second.scores.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
    assert_eq!(first.confidence_score.to_bits(), second.confidence_score.to_bits());
}

#[test]
fn more_points_never_lower_a_constitution() {
    let bank = |points: u8| {
        QuestionBank::new(vec![
            question(1, Category::Symptoms, vec![option(1, &[(Constitution::Soeum, points)])]),
            question(
                2,
                Category::Symptoms,
                vec![option(1, &[(Constitution::Soyang, 2), (Constitution::Soeum, 1)])],
            ),
        ])
    };
    let responses = [Response::new(1, 1), Response::new(2, 1)];
    let weights = CategoryWeights::default();

    let mut previous = 0.0;
    for points in 0..=3 {
        let score = score_questionnaire(&responses, &bank(points), &weights)
            .scores
            .soeum;
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn completeness_counts_distinct_resolved_answers() {
    let qsccii = Qsccii;
    let responses = [
        Response::new(1, 1),
        Response::new(1, 2),
        Response::new(2, 3),
        Response::new(3, 42),
    ];
    let report = completeness(&responses, qsccii.questions());

    assert_eq!(report.answered, 2);
    assert_eq!(report.total, qsccii.questions().len());
    assert_eq!(
        report.percent,
        100.0 * report.answered as f64 / report.total as f64
    );
}

#[test]
fn empty_bank_has_zero_completeness() {
    let report = completeness(&[Response::new(1, 1)], &QuestionBank::default());
    assert_eq!(report.total, 0);
    assert_eq!(report.percent, 0.0);
}
