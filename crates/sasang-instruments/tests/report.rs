use sasang_core::models::constitution::Constitution;
use sasang_instruments::confidence::{ConfidenceLevel, confidence};
use sasang_instruments::instruments::qsccii::Qsccii;
use sasang_instruments::report::diagnose;
use sasang_instruments::scoring::Response;

#[test]
fn empty_questionnaire_asks_for_more_answers() {
    let diagnosis = diagnose(&Qsccii, &[]);

    assert_eq!(diagnosis.instrument_id, "qsccii");
    assert_eq!(diagnosis.primary_constitution, Constitution::Taeyang);
    assert_eq!(diagnosis.confidence_level, ConfidenceLevel::Low);
    assert_eq!(diagnosis.completeness.percent, 0.0);
    assert!((diagnosis.percentages.sum() - 100.0).abs() < 1e-9);
    assert!(
        diagnosis
            .recommendations
            .last()
            .is_some_and(|line| line.contains("Answer every questionnaire item"))
    );
}

#[test]
fn complete_taeeum_questionnaire() {
    // Option 5 leans taeeum on body items, option 1 on bowel, sweat and
    // preference items.
    let mut responses: Vec<_> = (1..=5).map(|id| Response::new(id, 5)).collect();
    responses.extend([12, 14, 17, 18].map(|id| Response::new(id, 1)));
    responses.extend([6, 7, 8, 9, 10, 19, 20].map(|id| Response::new(id, 4)));
    responses.extend([11, 13, 15, 16].map(|id| Response::new(id, 3)));

    let diagnosis = diagnose(&Qsccii, &responses);

    assert_eq!(diagnosis.completeness.answered, 20);
    assert_eq!(diagnosis.primary_constitution, Constitution::Taeeum);
    assert_eq!(diagnosis.result.final_constitution, Constitution::Taeeum);
    assert_eq!(
        diagnosis.confidence_level,
        ConfidenceLevel::from_confidence(diagnosis.result.confidence_score)
    );
    assert!(diagnosis.recommendations[0].contains("태음인"));
    assert!(
        !diagnosis
            .recommendations
            .iter()
            .any(|line| line.contains("Answer every questionnaire item"))
    );
}

#[test]
fn confidence_levels_follow_thresholds() {
    assert_eq!(ConfidenceLevel::from_confidence(0.85), ConfidenceLevel::VeryHigh);
    assert_eq!(ConfidenceLevel::from_confidence(0.6), ConfidenceLevel::High);
    assert_eq!(ConfidenceLevel::from_confidence(0.45), ConfidenceLevel::Moderate);
    assert_eq!(ConfidenceLevel::from_confidence(0.1), ConfidenceLevel::Low);
}

#[test]
fn confidence_of_zero_vector_is_zero() {
    let zero = sasang_core::models::constitution::ConstitutionScores::zero();
    assert_eq!(confidence(&zero), 0.0);
}

#[test]
fn diagnosis_describes_primary_constitution() {
    let diagnosis = diagnose(&Qsccii, &[Response::new(1, 5)]);
    assert_eq!(diagnosis.primary_constitution, Constitution::Taeeum);
    assert_eq!(diagnosis.description, Constitution::Taeeum.description());
}
