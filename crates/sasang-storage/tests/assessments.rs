use sasang_core::keys;
use sasang_core::models::assessment::{AssessmentRecord, AssessmentResult};
use sasang_core::models::constitution::{CategoryScores, Constitution, ConstitutionScores};
use sasang_storage::assessments::{
    delete_assessment, list_assessments, load_assessment, save_assessment,
};
use sasang_storage::error::StorageError;
use sasang_storage::objects::ObjectStore;
use uuid::Uuid;

fn record(patient_name: &str, created_at: jiff::Timestamp) -> AssessmentRecord {
    let scores = ConstitutionScores {
        taeyang: 0.1,
        soyang: 0.2,
        taeeum: 0.6,
        soeum: 0.1,
    };
    AssessmentRecord {
        id: Uuid::new_v4(),
        patient_name: patient_name.to_string(),
        assessed_by: Some("Dr. Kim".to_string()),
        assessment_date: jiff::civil::date(2026, 10, 19),
        questionnaire: None,
        body_measurement: None,
        face_analysis: None,
        integrated: AssessmentResult {
            final_constitution: Constitution::Taeeum,
            confidence_score: 0.5,
            scores,
            category_scores: CategoryScores::zero(),
        },
        completeness: None,
        doctor_notes: None,
        storage_key: String::new(),
        created_at,
        updated_at: created_at,
    }
}

#[tokio::test]
async fn save_load_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = ObjectStore::open(dir.path()).await.unwrap();

    let mut saved = record("Lee", jiff::Timestamp::UNIX_EPOCH);
    save_assessment(&store, &mut saved).await.unwrap();
    assert_eq!(saved.storage_key, keys::assessment(saved.id));

    let loaded = load_assessment(&store, saved.id).await.unwrap();
    assert_eq!(loaded.patient_name, "Lee");
    assert_eq!(loaded.integrated, saved.integrated);

    delete_assessment(&store, saved.id).await.unwrap();
    let err = load_assessment(&store, saved.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn list_returns_oldest_first_and_skips_foreign_objects() {
    let dir = tempfile::tempdir().unwrap();
    let store = ObjectStore::open(dir.path()).await.unwrap();

    let later = jiff::Timestamp::from_second(2_000).unwrap();
    let earlier = jiff::Timestamp::from_second(1_000).unwrap();
    save_assessment(&store, &mut record("Park", later)).await.unwrap();
    save_assessment(&store, &mut record("Choi", earlier)).await.unwrap();
    store
        .put_object("assessments/readme.json", b"not a record".to_vec())
        .await
        .unwrap();

    let names: Vec<_> = list_assessments(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.patient_name)
        .collect();
    assert_eq!(names, vec!["Choi", "Park"]);
}
