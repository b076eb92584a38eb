//! Rule-based estimators over body and face measurements.
//!
//! Each rule adds fixed increments to a raw score vector. The vector is then
//! normalized by its own sum and the confidence is capped, since these are
//! weaker evidence than the questionnaire.

use sasang_core::models::assessment::AssessmentResult;
use sasang_core::models::constitution::Constitution::{self, *};
use sasang_core::models::constitution::{CategoryScores, ConstitutionScores};
use sasang_core::models::measurement::{BodyMeasurement, FaceMeasurement};

use crate::confidence::{BODY_CONFIDENCE_CEILING, FACE_CONFIDENCE_CEILING, capped_confidence};
use crate::scoring::{ScoreRange, ValidationError};

const HEIGHT_RANGE_CM: ScoreRange = ScoreRange {
    min: 100.0,
    max: 250.0,
    step: None,
};

const WEIGHT_RANGE_KG: ScoreRange = ScoreRange {
    min: 20.0,
    max: 300.0,
    step: None,
};

const NON_NEGATIVE: ScoreRange = ScoreRange {
    min: 0.0,
    max: f64::MAX,
    step: None,
};

pub fn score_body_measurement(body: &BodyMeasurement) -> AssessmentResult {
    let mut raw = ConstitutionScores::zero();

    if let Some(bmi) = body.raw_bmi() {
        if bmi < 18.5 {
            award(&mut raw, &[(Soeum, 0.4), (Taeyang, 0.3)]);
        } else if bmi < 23.0 {
            award(&mut raw, &[(Soyang, 0.4), (Soeum, 0.2)]);
        } else if bmi < 25.0 {
            award(&mut raw, &[(Taeeum, 0.4), (Soyang, 0.2)]);
        } else {
            award(&mut raw, &[(Taeeum, 0.6)]);
        }
    }

    match body.shoulder_to_waist() {
        Some(r) if r > 1.3 => award(&mut raw, &[(Taeyang, 0.3), (Taeeum, 0.2)]),
        Some(r) if r < 1.1 => award(&mut raw, &[(Soeum, 0.3)]),
        _ => {}
    }

    match body.waist_to_hip() {
        Some(r) if r < 0.8 => award(&mut raw, &[(Taeeum, 0.2)]),
        Some(r) if r > 0.9 => award(&mut raw, &[(Soyang, 0.2), (Taeyang, 0.1)]),
        _ => {}
    }

    let result = finish(raw, BODY_CONFIDENCE_CEILING);
    tracing::debug!(
        bmi = ?body.bmi(),
        constitution = %result.final_constitution,
        "body measurement scored"
    );
    result
}

pub fn score_face_measurement(face: &FaceMeasurement) -> AssessmentResult {
    let mut raw = ConstitutionScores::zero();

    match face.length_to_width() {
        Some(r) if r > 1.3 => award(&mut raw, &[(Soeum, 0.3), (Soyang, 0.2)]),
        Some(r) if r < 1.1 => award(&mut raw, &[(Taeeum, 0.3)]),
        _ => {}
    }

    match face.upper_to_lower() {
        Some(r) if r > 1.2 => award(&mut raw, &[(Taeyang, 0.3)]),
        Some(r) if r < 0.9 => award(&mut raw, &[(Taeeum, 0.2)]),
        _ => {}
    }

    if face.cheekbone_to_width().is_some_and(|r| r > 0.9) {
        award(&mut raw, &[(Soyang, 0.2)]);
    }

    let result = finish(raw, FACE_CONFIDENCE_CEILING);
    tracing::debug!(constitution = %result.final_constitution, "face measurement scored");
    result
}

/// Check body measurements against plausible clinical ranges.
pub fn validate_body(body: &BodyMeasurement) -> Vec<ValidationError> {
    let fields = [
        ("height_cm", body.height_cm, HEIGHT_RANGE_CM),
        ("weight_kg", body.weight_kg, WEIGHT_RANGE_KG),
        ("shoulder_width_cm", body.shoulder_width_cm, NON_NEGATIVE),
        ("waist_circumference_cm", body.waist_circumference_cm, NON_NEGATIVE),
        ("hip_circumference_cm", body.hip_circumference_cm, NON_NEGATIVE),
        ("chest_circumference_cm", body.chest_circumference_cm, NON_NEGATIVE),
        ("body_fat_percentage", body.body_fat_percentage, NON_NEGATIVE),
        ("muscle_mass_kg", body.muscle_mass_kg, NON_NEGATIVE),
    ];

    fields
        .into_iter()
        .filter_map(|(field, value, range)| out_of_range(field, value?, range))
        .collect()
}

/// Face measurements need at least one value, and every value must be
/// positive.
pub fn validate_face(face: &FaceMeasurement) -> Vec<ValidationError> {
    if face.is_empty() {
        return vec![ValidationError {
            field: "face".to_string(),
            value: None,
            expected_range: None,
            message: "at least one face measurement is required".to_string(),
        }];
    }

    let positive = ScoreRange {
        min: f64::MIN_POSITIVE,
        max: f64::MAX,
        step: None,
    };
    face.fields()
        .into_iter()
        .filter_map(|(field, value)| out_of_range(field, value?, positive))
        .collect()
}

fn out_of_range(field: &str, value: f64, range: ScoreRange) -> Option<ValidationError> {
    if range.contains(value) {
        return None;
    }
    let message = if range.max < f64::MAX {
        format!(
            "{field}: {value} is outside range [{}, {}]",
            range.min, range.max
        )
    } else if range.min > 0.0 {
        format!("{field}: {value} must be greater than zero")
    } else {
        format!("{field}: {value} must not be negative")
    };
    Some(ValidationError {
        field: field.to_string(),
        value: Some(value),
        expected_range: Some(range),
        message,
    })
}

fn award(scores: &mut ConstitutionScores, increments: &[(Constitution, f64)]) {
    for &(constitution, points) in increments {
        scores.add(constitution, points);
    }
}

/// Normalize raw rule points into a result. With no rule fired every
/// constitution gets an equal quarter.
fn finish(raw: ConstitutionScores, ceiling: f64) -> AssessmentResult {
    let total = raw.sum();
    let scores = if total > 0.0 {
        raw.map(|v| v / total)
    } else {
        ConstitutionScores::uniform(0.25)
    };

    AssessmentResult {
        final_constitution: scores.primary(),
        confidence_score: capped_confidence(&scores, ceiling),
        scores,
        category_scores: CategoryScores {
            body: scores,
            ..CategoryScores::zero()
        },
    }
}
