use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sasang_core::models::constitution::ConstitutionScores;

/// Confidence reported when no constitution scores above zero.
pub const DEGENERATE_CONFIDENCE: f64 = 0.0;

/// Ceiling applied to body-measurement confidence.
pub const BODY_CONFIDENCE_CEILING: f64 = 0.6;

/// Ceiling applied to face-measurement confidence.
pub const FACE_CONFIDENCE_CEILING: f64 = 0.5;

/// Relative lead of the top score over the runner-up, in [0, 1].
///
/// This measures dominance, not probability: a result of 0.5 means the
/// winner scored twice the runner-up.
pub fn confidence(scores: &ConstitutionScores) -> f64 {
    match scores.ranked().as_slice() {
        [(_, top), (_, second), ..] if *top > 0.0 => ((top - second) / top).clamp(0.0, 1.0),
        _ => DEGENERATE_CONFIDENCE,
    }
}

/// [`confidence`] scaled down to a modality's ceiling.
pub fn capped_confidence(scores: &ConstitutionScores, ceiling: f64) -> f64 {
    confidence(scores) * ceiling
}

/// Coarse band used when presenting a confidence to clinicians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConfidenceLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceLevel::VeryHigh
        } else if confidence >= 0.6 {
            ConfidenceLevel::High
        } else if confidence >= 0.4 {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }
}
