use sasang_core::models::constitution::{Constitution, ConstitutionScores};
use sasang_core::models::measurement::{BodyMeasurement, FaceMeasurement};
use sasang_instruments::measurement::{
    score_body_measurement, score_face_measurement, validate_body, validate_face,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn underweight_leans_soeum() {
    let result = score_body_measurement(&BodyMeasurement {
        height_cm: Some(170.0),
        weight_kg: Some(49.0),
        ..Default::default()
    });

    assert_eq!(result.final_constitution, Constitution::Soeum);
    assert!(close(result.scores.soeum, 0.4 / 0.7));
    assert!(close(result.scores.taeyang, 0.3 / 0.7));
    assert!(close(result.confidence_score, 0.25 * 0.6));
    assert!(close(result.scores.sum(), 1.0));
}

#[test]
fn broad_shoulders_and_heavy_build_lean_taeeum() {
    let result = score_body_measurement(&BodyMeasurement {
        height_cm: Some(170.0),
        weight_kg: Some(90.0),
        shoulder_width_cm: Some(50.0),
        waist_circumference_cm: Some(35.0),
        hip_circumference_cm: Some(100.0),
        ..Default::default()
    });

    assert_eq!(result.final_constitution, Constitution::Taeeum);
    assert!(close(result.scores.taeeum, 1.0 / 1.3));
    assert!(close(result.confidence_score, 0.7 * 0.6));
    assert_eq!(result.category_scores.body, result.scores);
    assert_eq!(result.category_scores.personality, ConstitutionScores::zero());
}

#[test]
fn missing_ratio_inputs_fire_no_rules() {
    let result = score_body_measurement(&BodyMeasurement::default());

    assert_eq!(result.scores, ConstitutionScores::uniform(0.25));
    assert_eq!(result.final_constitution, Constitution::Taeyang);
    assert_eq!(result.confidence_score, 0.0);
}

#[test]
fn long_face_with_broad_forehead() {
    let result = score_face_measurement(&FaceMeasurement {
        face_length: Some(22.0),
        face_width: Some(15.0),
        forehead_width: Some(14.0),
        cheekbone_width: Some(14.0),
        jaw_width: Some(10.0),
    });

    assert_eq!(result.final_constitution, Constitution::Soyang);
    assert!(close(result.scores.soyang, 0.4));
    assert!(close(result.scores.soeum, 0.3));
    assert!(close(result.scores.taeyang, 0.3));
    assert!(close(result.confidence_score, 0.125));
}

#[test]
fn face_with_no_rule_is_uniform() {
    let result = score_face_measurement(&FaceMeasurement {
        face_length: Some(18.0),
        face_width: Some(15.0),
        ..Default::default()
    });
    assert_eq!(result.scores, ConstitutionScores::uniform(0.25));
    assert_eq!(result.confidence_score, 0.0);
}

#[test]
fn modality_confidence_never_exceeds_its_ceiling() {
    for weight in [40.0, 55.0, 65.0, 80.0, 120.0] {
        for shoulder in [30.0, 40.0, 55.0] {
            let body = BodyMeasurement {
                height_cm: Some(170.0),
                weight_kg: Some(weight),
                shoulder_width_cm: Some(shoulder),
                waist_circumference_cm: Some(38.0),
                hip_circumference_cm: Some(45.0),
                ..Default::default()
            };
            assert!(score_body_measurement(&body).confidence_score <= 0.6);
        }
    }

    for length in [12.0, 16.0, 24.0] {
        for jaw in [8.0, 12.0, 16.0] {
            let face = FaceMeasurement {
                face_length: Some(length),
                face_width: Some(15.0),
                forehead_width: Some(12.0),
                cheekbone_width: Some(14.5),
                jaw_width: Some(jaw),
            };
            assert!(score_face_measurement(&face).confidence_score <= 0.5);
        }
    }
}

#[test]
fn body_validation_reports_out_of_range_fields() {
    let errors = validate_body(&BodyMeasurement {
        height_cm: Some(90.0),
        weight_kg: Some(70.0),
        waist_circumference_cm: Some(-3.0),
        ..Default::default()
    });

    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["height_cm", "waist_circumference_cm"]);
    assert!(errors[0].message.contains("outside range [100, 250]"));
}

#[test]
fn body_validation_accepts_plausible_input() {
    let body = BodyMeasurement {
        height_cm: Some(172.5),
        weight_kg: Some(68.0),
        body_fat_percentage: Some(0.0),
        ..Default::default()
    };
    assert!(validate_body(&body).is_empty());
}

#[test]
fn face_validation_requires_positive_values() {
    assert_eq!(validate_face(&FaceMeasurement::default()).len(), 1);

    let errors = validate_face(&FaceMeasurement {
        face_length: Some(20.0),
        face_width: Some(0.0),
        ..Default::default()
    });
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "face_width");
}

#[test]
fn bmi_bracket_uses_unrounded_value() {
    // BMI 18.46 displays as 18.5 but is still underweight.
    let result = score_body_measurement(&BodyMeasurement {
        height_cm: Some(170.0),
        weight_kg: Some(53.35),
        ..Default::default()
    });

    assert_eq!(result.final_constitution, Constitution::Soeum);
    assert!(close(result.scores.soeum, 0.4 / 0.7));
    assert!(close(result.scores.taeyang, 0.3 / 0.7));
    assert_eq!(result.scores.soyang, 0.0);
}
