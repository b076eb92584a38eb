use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sasang_core::models::assessment::AssessmentResult;
use sasang_core::models::constitution::{Category, Constitution, ConstitutionScores};

use crate::Instrument;
use crate::confidence::ConfidenceLevel;
use crate::questionnaire::{Completeness, completeness};
use crate::scoring::Response;

/// Category scores below this share of the maximum trigger a targeted
/// recommendation.
const WEAK_CATEGORY_THRESHOLD: f64 = 2.0 / 3.0;

/// Below this completeness percentage the respondent is asked to finish
/// the questionnaire.
const COMPLETENESS_THRESHOLD: f64 = 90.0;

/// A questionnaire result prepared for presentation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    pub instrument_id: String,
    pub primary_constitution: Constitution,
    pub description: String,
    pub result: AssessmentResult,
    pub completeness: Completeness,
    /// Each constitution's share of the total final score, in percent.
    pub percentages: ConstitutionScores,
    pub confidence_level: ConfidenceLevel,
    pub recommendations: Vec<String>,
}

pub fn diagnose(instrument: &dyn Instrument, responses: &[Response]) -> Diagnosis {
    let result = instrument.score(responses);
    let completeness = completeness(responses, instrument.questions());
    let primary = result.final_constitution;

    Diagnosis {
        instrument_id: instrument.id().to_string(),
        primary_constitution: primary,
        description: primary.description().to_string(),
        percentages: result.scores.shares(),
        confidence_level: ConfidenceLevel::from_confidence(result.confidence_score),
        recommendations: recommendations(&result, &completeness),
        completeness,
        result,
    }
}

pub fn recommendations(result: &AssessmentResult, completeness: &Completeness) -> Vec<String> {
    let primary = result.final_constitution;
    let mut lines = vec![
        format!(
            "Keep daily habits suited to the {} ({primary}) constitution.",
            primary.korean_name()
        ),
        format!("Diet: {}", diet_guidance(primary)),
        format!("Health care: {}", health_guidance(primary)),
    ];

    for category in [Category::Body, Category::Personality, Category::Symptoms] {
        if result.category_scores.get(category).get(primary) < WEAK_CATEGORY_THRESHOLD {
            lines.push(category_guidance(category).to_string());
        }
    }

    if completeness.percent < COMPLETENESS_THRESHOLD {
        lines.push(
            "Answer every questionnaire item for a more reliable diagnosis.".to_string(),
        );
    }

    lines
}

pub fn diet_guidance(constitution: Constitution) -> &'static str {
    match constitution {
        Constitution::Taeyang => "seafood and foods with a cooling nature",
        Constitution::Soyang => "pork, seafood and foods with a cold nature",
        Constitution::Taeeum => "beef, job's tears, bellflower root and warming foods",
        Constitution::Soeum => "chicken, ginseng, ginger and warming foods",
    }
}

pub fn health_guidance(constitution: Constitution) -> &'static str {
    match constitution {
        Constitution::Taeyang => "protect neck and lung function and keep liver function in balance",
        Constitution::Soyang => "support kidney and bladder function and watch digestion",
        Constitution::Taeeum => "support lung and large-intestine function and manage circulation",
        Constitution::Soeum => "strengthen stomach and spleen function and digestion",
    }
}

fn category_guidance(category: Category) -> &'static str {
    match category {
        Category::Body => "Exercise regularly to manage body shape.",
        Category::Personality => {
            "Understand your temperament and pay attention to stress management."
        }
        Category::Symptoms => "Consider herbal treatment suited to current symptoms.",
        Category::Preferences => "Adjust food preferences toward your constitution.",
    }
}
