use crate::Instrument;
use crate::scoring::{CategoryWeights, QuestionBank};

/// QSCCII: Questionnaire for Sasang Constitution Classification II.
/// Body, personality, symptom and preference items; each option awards
/// 0–3 points per constitution.
pub struct Qsccii;

impl Instrument for Qsccii {
    fn id(&self) -> &str {
        "qsccii"
    }

    fn name(&self) -> &str {
        "QSCCII"
    }

    fn questions(&self) -> &QuestionBank {
        static QUESTIONS: std::sync::LazyLock<QuestionBank> = std::sync::LazyLock::new(|| {
            QuestionBank::from_json(include_str!("../../data/qsccii.json")).unwrap_or_else(|e| {
                tracing::error!("embedded QSCCII question bank is invalid: {e}");
                QuestionBank::default()
            })
        });
        &QUESTIONS
    }

    fn weights(&self) -> &CategoryWeights {
        static WEIGHTS: std::sync::LazyLock<CategoryWeights> =
            std::sync::LazyLock::new(CategoryWeights::default);
        &WEIGHTS
    }
}
