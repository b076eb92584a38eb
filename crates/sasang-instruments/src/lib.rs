//! sasang-instruments
//!
//! Constitution classification engine. Pure computation, no I/O: question
//! banks and weight tables are passed in, results are returned fresh.
//!
//! The questionnaire is the primary modality. Body and face measurements
//! feed small rule tables, and [`fusion::fuse`] combines whatever subset of
//! the three is available.

pub mod confidence;
pub mod error;
pub mod fusion;
pub mod instruments;
pub mod measurement;
pub mod questionnaire;
pub mod report;
pub mod scoring;

use std::collections::BTreeSet;

use sasang_core::models::assessment::AssessmentResult;

use scoring::{CategoryWeights, QuestionBank, Response, ValidationError};

/// Trait implemented by each constitution questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "qsccii").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "QSCCII").
    fn name(&self) -> &str;

    /// The items this instrument asks.
    fn questions(&self) -> &QuestionBank;

    /// Category weighting applied to this instrument's answers.
    fn weights(&self) -> &CategoryWeights;

    /// Report responses the scorer will ignore. These are findings for the
    /// caller, not scoring failures.
    fn validate_responses(&self, responses: &[Response]) -> Vec<ValidationError> {
        let mut seen = BTreeSet::new();
        let mut errors = Vec::new();
        for response in responses {
            let field = format!("question_{}", response.question_id);
            let value = Some(f64::from(response.selected_value));

            if !seen.insert(response.question_id) {
                errors.push(ValidationError {
                    field: field.clone(),
                    value,
                    expected_range: None,
                    message: format!(
                        "{}: question {} answered more than once, the last answer counts",
                        self.name(),
                        response.question_id,
                    ),
                });
            }

            let Some(question) = self.questions().get(response.question_id) else {
                errors.push(ValidationError {
                    field,
                    value,
                    expected_range: None,
                    message: format!(
                        "{}: unknown question {}",
                        self.name(),
                        response.question_id,
                    ),
                });
                continue;
            };

            if question.option(response.selected_value).is_none() {
                errors.push(ValidationError {
                    field,
                    value,
                    expected_range: question.value_range(),
                    message: format!(
                        "{}: question {} has no option {}",
                        self.name(),
                        response.question_id,
                        response.selected_value,
                    ),
                });
            }
        }
        errors
    }

    /// Score responses with this instrument's bank and weights.
    fn score(&self, responses: &[Response]) -> AssessmentResult {
        questionnaire::score_questionnaire(responses, self.questions(), self.weights())
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::qsccii::Qsccii)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
