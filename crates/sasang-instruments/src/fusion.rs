use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sasang_core::models::assessment::{AssessmentResult, Modality};
use sasang_core::models::constitution::{CategoryScores, ConstitutionScores};

use crate::error::InstrumentError;

/// Confidence bonus per contributing modality.
const MODALITY_BONUS: f64 = 0.1;

/// Upper bound on the multi-modality bonus.
const MAX_MODALITY_BONUS: f64 = 0.2;

/// Per-modality results available for integration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModalityResults {
    pub questionnaire: Option<AssessmentResult>,
    pub body_measurement: Option<AssessmentResult>,
    pub face_analysis: Option<AssessmentResult>,
}

impl ModalityResults {
    pub fn get(&self, modality: Modality) -> Option<&AssessmentResult> {
        match modality {
            Modality::Questionnaire => self.questionnaire.as_ref(),
            Modality::BodyMeasurement => self.body_measurement.as_ref(),
            Modality::FaceAnalysis => self.face_analysis.as_ref(),
        }
    }

    /// Present results, in fixed modality order.
    pub fn present(&self) -> impl Iterator<Item = (Modality, &AssessmentResult)> {
        Modality::ALL
            .into_iter()
            .filter_map(|m| self.get(m).map(|r| (m, r)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Combine whichever modality results are present into one result.
///
/// Modality weights are renormalized over the modalities actually present,
/// so a lone result passes through with its scores unchanged. Confidence is
/// the mean of the present confidences plus a small bonus per modality.
pub fn fuse(results: &ModalityResults) -> Result<AssessmentResult, InstrumentError> {
    let total_weight: f64 = results.present().map(|(m, _)| m.weight()).sum();
    if results.is_empty() || total_weight <= 0.0 {
        return Err(InstrumentError::NoModalities);
    }

    let mut scores = ConstitutionScores::zero();
    let mut confidence_sum = 0.0;
    let mut count = 0usize;
    for (modality, result) in results.present() {
        let share = modality.weight() / total_weight;
        for (constitution, value) in result.scores.iter() {
            scores.add(constitution, value * share);
        }
        confidence_sum += result.confidence_score;
        count += 1;
    }

    let average = confidence_sum / count as f64;
    let bonus = (count as f64 * MODALITY_BONUS).min(MAX_MODALITY_BONUS);
    let fused = AssessmentResult {
        final_constitution: scores.primary(),
        confidence_score: (average + bonus).clamp(0.0, 1.0),
        scores,
        category_scores: results
            .questionnaire
            .as_ref()
            .map(|q| q.category_scores)
            .unwrap_or_else(CategoryScores::zero),
    };

    tracing::debug!(
        modalities = count,
        constitution = %fused.final_constitution,
        confidence = fused.confidence_score,
        "assessment results integrated"
    );
    Ok(fused)
}
