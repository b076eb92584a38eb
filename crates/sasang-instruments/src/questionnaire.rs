//! Questionnaire scoring: raw answer points are summed per category,
//! normalized by the maximum attainable points, then combined with the
//! per-constitution category weights.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sasang_core::models::assessment::AssessmentResult;
use sasang_core::models::constitution::{
    Category, CategoryScores, Constitution, ConstitutionScores,
};

use crate::confidence::confidence;
use crate::scoring::{
    AnswerOption, CategoryWeights, MAX_OPTION_POINTS, Question, QuestionBank, Response,
};

/// How much of the question bank was answered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Completeness {
    pub answered: usize,
    pub total: usize,
    /// `100 × answered / total`, or 0 for an empty bank.
    pub percent: f64,
}

/// Score a set of responses against a question bank.
///
/// Responses naming an unknown question or an unknown option are skipped.
/// When one question is answered more than once the last answer counts.
pub fn score_questionnaire(
    responses: &[Response],
    bank: &QuestionBank,
    weights: &CategoryWeights,
) -> AssessmentResult {
    let category_scores = score_categories(responses, bank);
    let scores = aggregate(&category_scores, weights);
    let result = AssessmentResult {
        final_constitution: scores.primary(),
        confidence_score: confidence(&scores),
        scores,
        category_scores,
    };
    tracing::debug!(
        responses = responses.len(),
        constitution = %result.final_constitution,
        confidence = result.confidence_score,
        "questionnaire scored"
    );
    result
}

/// Per-category score vectors, each normalized into [0, 1].
pub fn score_categories(responses: &[Response], bank: &QuestionBank) -> CategoryScores {
    let mut scores = CategoryScores::zero();
    let mut answered: BTreeMap<Category, u32> = BTreeMap::new();

    for (question, option) in resolve(responses, bank) {
        *answered.entry(question.category).or_default() += 1;
        let accumulator = scores.get_mut(question.category);
        for (&constitution, &points) in &option.constitutions {
            accumulator.add(constitution, f64::from(points));
        }
    }

    for (category, count) in answered {
        let max_possible = f64::from(count) * f64::from(MAX_OPTION_POINTS);
        let accumulator = scores.get_mut(category);
        *accumulator = accumulator.map(|points| points / max_possible);
    }

    scores
}

/// Weighted sum of the category vectors, per constitution.
pub fn aggregate(category_scores: &CategoryScores, weights: &CategoryWeights) -> ConstitutionScores {
    let mut total = ConstitutionScores::zero();
    for constitution in Constitution::ALL {
        let value: f64 = Category::ALL
            .into_iter()
            .map(|category| {
                category_scores.get(category).get(constitution)
                    * weights.weight(constitution, category)
            })
            .sum();
        *total.get_mut(constitution) = value;
    }
    total
}

/// Share of the bank with a usable answer. Reported next to confidence,
/// never blended into it.
pub fn completeness(responses: &[Response], bank: &QuestionBank) -> Completeness {
    let answered = resolve(responses, bank).count();
    let total = bank.len();
    let percent = if total == 0 {
        0.0
    } else {
        100.0 * answered as f64 / total as f64
    };
    Completeness {
        answered,
        total,
        percent,
    }
}

/// Collapse responses into one answer per question and pair each with its
/// question and selected option, dropping anything that does not resolve.
fn resolve<'a>(
    responses: &[Response],
    bank: &'a QuestionBank,
) -> impl Iterator<Item = (&'a Question, &'a AnswerOption)> {
    let answers: BTreeMap<u32, u8> = responses
        .iter()
        .map(|r| (r.question_id, r.selected_value))
        .collect();

    answers.into_iter().filter_map(move |(question_id, value)| {
        let Some(question) = bank.get(question_id) else {
            tracing::warn!(question_id, "skipping response to unknown question");
            return None;
        };
        let Some(option) = question.option(value) else {
            tracing::warn!(question_id, value, "skipping response with unknown option");
            return None;
        };
        Some((question, option))
    })
}
