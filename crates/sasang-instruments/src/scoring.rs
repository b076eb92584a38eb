use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use sasang_core::models::constitution::{Category, Constitution};

use crate::error::InstrumentError;

/// Highest point value a single answer option may award one constitution.
pub const MAX_OPTION_POINTS: u8 = 3;

/// Defines the valid range for a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One selectable answer. Constitutions absent from the map receive no
/// points.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u8,
    pub text: String,
    pub constitutions: BTreeMap<Constitution, u8>,
}

impl AnswerOption {
    pub fn points(&self, constitution: Constitution) -> u8 {
        self.constitutions.get(&constitution).copied().unwrap_or(0)
    }
}

/// A fixed-choice questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, value: u8) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Range spanned by this question's option values.
    pub fn value_range(&self) -> Option<ScoreRange> {
        let min = self.options.iter().map(|o| o.value).min()?;
        let max = self.options.iter().map(|o| o.value).max()?;
        Some(ScoreRange {
            min: f64::from(min),
            max: f64::from(max),
            step: Some(1.0),
        })
    }
}

/// Immutable question table consumed by the scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse and validate a bank. A bank with any [`validate`](Self::validate)
    /// finding is rejected.
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let bank: Self = serde_json::from_str(json)?;
        let errors = bank.validate();
        if !errors.is_empty() {
            let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(InstrumentError::InvalidQuestionBank(messages.join("; ")));
        }
        Ok(bank)
    }

    /// Report duplicate question ids, duplicate option values and options
    /// awarding more than [`MAX_OPTION_POINTS`].
    pub fn validate(&self) -> Vec<ValidationError> {
        let points_range = ScoreRange {
            min: 0.0,
            max: f64::from(MAX_OPTION_POINTS),
            step: Some(1.0),
        };
        let mut errors = Vec::new();
        let mut question_ids = BTreeSet::new();

        for question in &self.questions {
            let field = format!("question_{}", question.id);
            if !question_ids.insert(question.id) {
                errors.push(ValidationError {
                    field: field.clone(),
                    value: None,
                    expected_range: None,
                    message: format!("question {} appears more than once", question.id),
                });
            }

            let mut values = BTreeSet::new();
            for option in &question.options {
                if !values.insert(option.value) {
                    errors.push(ValidationError {
                        field: field.clone(),
                        value: Some(f64::from(option.value)),
                        expected_range: None,
                        message: format!(
                            "question {} has option {} more than once",
                            question.id, option.value
                        ),
                    });
                }
                for (constitution, &points) in &option.constitutions {
                    if points > MAX_OPTION_POINTS {
                        errors.push(ValidationError {
                            field: format!("{field}.option_{}.{constitution}", option.value),
                            value: Some(f64::from(points)),
                            expected_range: Some(points_range),
                            message: format!(
                                "question {} option {} awards {points} points to {constitution}, at most {MAX_OPTION_POINTS} allowed",
                                question.id, option.value
                            ),
                        });
                    }
                }
            }
        }
        errors
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .count()
    }
}

/// Category weights for one constitution. Should sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightRow {
    pub body: f64,
    pub personality: f64,
    pub symptoms: f64,
    pub preferences: f64,
}

impl WeightRow {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Body => self.body,
            Category::Personality => self.personality,
            Category::Symptoms => self.symptoms,
            Category::Preferences => self.preferences,
        }
    }

    pub fn total(&self) -> f64 {
        Category::ALL.into_iter().map(|c| self.get(c)).sum()
    }
}

/// How much each question category counts toward each constitution's
/// final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryWeights {
    pub taeyang: WeightRow,
    pub soyang: WeightRow,
    pub taeeum: WeightRow,
    pub soeum: WeightRow,
}

impl CategoryWeights {
    pub fn row(&self, constitution: Constitution) -> &WeightRow {
        match constitution {
            Constitution::Taeyang => &self.taeyang,
            Constitution::Soyang => &self.soyang,
            Constitution::Taeeum => &self.taeeum,
            Constitution::Soeum => &self.soeum,
        }
    }

    pub fn weight(&self, constitution: Constitution, category: Category) -> f64 {
        self.row(constitution).get(category)
    }

    /// Report rows that do not sum to 1.0.
    pub fn validate(&self) -> Vec<ValidationError> {
        let unit = ScoreRange {
            min: 1.0 - 1e-9,
            max: 1.0 + 1e-9,
            step: None,
        };
        Constitution::ALL
            .into_iter()
            .filter_map(|c| {
                let total = self.row(c).total();
                (!unit.contains(total)).then(|| ValidationError {
                    field: format!("weights.{c}"),
                    value: Some(total),
                    expected_range: Some(unit),
                    message: format!("category weights for {c} sum to {total}, expected 1.0"),
                })
            })
            .collect()
    }
}

impl Default for CategoryWeights {
    /// QSCCII weighting.
    fn default() -> Self {
        Self {
            taeyang: WeightRow {
                body: 0.3,
                personality: 0.4,
                symptoms: 0.2,
                preferences: 0.1,
            },
            soyang: WeightRow {
                body: 0.2,
                personality: 0.5,
                symptoms: 0.2,
                preferences: 0.1,
            },
            taeeum: WeightRow {
                body: 0.4,
                personality: 0.3,
                symptoms: 0.2,
                preferences: 0.1,
            },
            soeum: WeightRow {
                body: 0.3,
                personality: 0.3,
                symptoms: 0.3,
                preferences: 0.1,
            },
        }
    }
}

/// A respondent's answer to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub question_id: u32,
    pub selected_value: u8,
}

impl Response {
    pub fn new(question_id: u32, selected_value: u8) -> Self {
        Self {
            question_id,
            selected_value,
        }
    }
}

/// A reported problem with caller input. Never fatal to scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: Option<f64>,
    pub expected_range: Option<ScoreRange>,
    pub message: String,
}
