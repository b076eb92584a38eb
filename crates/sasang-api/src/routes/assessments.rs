use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use uuid::Uuid;

use sasang_core::models::assessment::AssessmentRecord;
use sasang_core::models::measurement::{BodyMeasurement, FaceMeasurement};
use sasang_instruments::fusion::{ModalityResults, fuse};
use sasang_instruments::measurement::{
    score_body_measurement, score_face_measurement, validate_body, validate_face,
};
use sasang_instruments::questionnaire::completeness;
use sasang_instruments::scoring::Response;
use sasang_storage::assessments;

use crate::error::ApiError;
use crate::routes::score::resolve_instrument;
use crate::state::AppState;

/// Raw inputs for a new assessment. Any subset of the three modalities may
/// be supplied, but at least one is required.
#[derive(Deserialize)]
pub struct CreateAssessment {
    pub patient_name: String,
    pub assessed_by: Option<String>,
    pub assessment_date: Option<jiff::civil::Date>,
    pub doctor_notes: Option<String>,
    pub instrument_id: Option<String>,
    pub responses: Option<Vec<Response>>,
    pub body_measurement: Option<BodyMeasurement>,
    pub face_measurement: Option<FaceMeasurement>,
}

/// Editable fields of a saved assessment. Scores are never rewritten.
#[derive(Deserialize)]
pub struct UpdateAssessment {
    pub assessed_by: Option<String>,
    pub doctor_notes: Option<String>,
}

pub async fn list_assessments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    Ok(Json(assessments::list_assessments(&state.store).await?))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    Ok(Json(assessments::load_assessment(&state.store, id).await?))
}

pub async fn create_assessment(
    State(state): State<AppState>,
    Json(request): Json<CreateAssessment>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let patient_name = request.patient_name.trim().to_string();
    if patient_name.is_empty() {
        return Err(ApiError::BadRequest("patient_name is required".to_string()));
    }

    let mut results = ModalityResults::default();
    let mut questionnaire_completeness = None;

    if let Some(responses) = &request.responses {
        let instrument = resolve_instrument(&state, request.instrument_id.as_deref())?;
        results.questionnaire = Some(instrument.score(responses));
        questionnaire_completeness =
            Some(completeness(responses, instrument.questions()).percent);
    }

    if let Some(body) = &request.body_measurement {
        let errors = validate_body(body);
        if !errors.is_empty() {
            return Err(ApiError::invalid(&errors));
        }
        results.body_measurement = Some(score_body_measurement(body));
    }

    if let Some(face) = &request.face_measurement {
        let errors = validate_face(face);
        if !errors.is_empty() {
            return Err(ApiError::invalid(&errors));
        }
        results.face_analysis = Some(score_face_measurement(face));
    }

    let integrated = fuse(&results)?;
    let now = jiff::Timestamp::now();
    let mut record = AssessmentRecord {
        id: Uuid::new_v4(),
        patient_name,
        assessed_by: request.assessed_by,
        assessment_date: request
            .assessment_date
            .unwrap_or_else(|| jiff::Zoned::now().date()),
        questionnaire: results.questionnaire,
        body_measurement: results.body_measurement,
        face_analysis: results.face_analysis,
        integrated,
        completeness: questionnaire_completeness,
        doctor_notes: request.doctor_notes,
        storage_key: String::new(),
        created_at: now,
        updated_at: now,
    };
    assessments::save_assessment(&state.store, &mut record).await?;

    Ok(Json(record))
}

pub async fn update_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateAssessment>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let mut record = assessments::load_assessment(&state.store, id).await?;
    if let Some(assessed_by) = update.assessed_by {
        record.assessed_by = Some(assessed_by);
    }
    if let Some(notes) = update.doctor_notes {
        record.doctor_notes = Some(notes);
    }
    record.updated_at = jiff::Timestamp::now();
    assessments::save_assessment(&state.store, &mut record).await?;
    Ok(Json(record))
}

pub async fn delete_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    assessments::delete_assessment(&state.store, id).await?;
    Ok(Json(()))
}
