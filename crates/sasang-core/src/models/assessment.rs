use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::constitution::{CategoryScores, Constitution, ConstitutionScores};

/// Outcome of one scoring pass. Created fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub final_constitution: Constitution,
    /// How far the winner leads the runner-up, in [0, 1].
    pub confidence_score: f64,
    pub scores: ConstitutionScores,
    pub category_scores: CategoryScores,
}

/// An independent source of diagnostic evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Modality {
    Questionnaire,
    BodyMeasurement,
    FaceAnalysis,
}

impl Modality {
    pub const ALL: [Modality; 3] = [
        Modality::Questionnaire,
        Modality::BodyMeasurement,
        Modality::FaceAnalysis,
    ];

    /// Fixed fusion weight. The questionnaire is the primary instrument.
    pub fn weight(self) -> f64 {
        match self {
            Modality::Questionnaire => 0.7,
            Modality::BodyMeasurement => 0.2,
            Modality::FaceAnalysis => 0.1,
        }
    }
}

/// A saved constitution assessment for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub patient_name: String,
    pub assessed_by: Option<String>,
    pub assessment_date: jiff::civil::Date,
    pub questionnaire: Option<AssessmentResult>,
    pub body_measurement: Option<AssessmentResult>,
    pub face_analysis: Option<AssessmentResult>,
    pub integrated: AssessmentResult,
    /// Percentage of questionnaire items answered, when a questionnaire was
    /// taken.
    pub completeness: Option<f64>,
    pub doctor_notes: Option<String>,
    pub storage_key: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
