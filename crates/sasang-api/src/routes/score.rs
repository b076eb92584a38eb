//! Stateless scoring endpoints. Nothing here touches storage.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use sasang_core::models::assessment::AssessmentResult;
use sasang_core::models::measurement::{BodyMeasurement, FaceMeasurement};
use sasang_instruments::error::InstrumentError;
use sasang_instruments::fusion::{ModalityResults, fuse};
use sasang_instruments::measurement::{
    score_body_measurement, score_face_measurement, validate_body, validate_face,
};
use sasang_instruments::report::{Diagnosis, diagnose};
use sasang_instruments::scoring::{Response, ValidationError};
use sasang_instruments::{Instrument, get_instrument};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QuestionnaireRequest {
    pub instrument_id: Option<String>,
    pub responses: Vec<Response>,
}

#[derive(Serialize)]
pub struct QuestionnaireResponse {
    #[serde(flatten)]
    pub diagnosis: Diagnosis,
    /// Responses the scorer ignored, and why.
    pub warnings: Vec<ValidationError>,
}

pub async fn score_questionnaire(
    State(state): State<AppState>,
    Json(request): Json<QuestionnaireRequest>,
) -> Result<Json<QuestionnaireResponse>, ApiError> {
    let instrument = resolve_instrument(&state, request.instrument_id.as_deref())?;
    let warnings = instrument.validate_responses(&request.responses);
    if !warnings.is_empty() {
        tracing::warn!(
            instrument = instrument.id(),
            count = warnings.len(),
            "questionnaire responses ignored"
        );
    }

    Ok(Json(QuestionnaireResponse {
        diagnosis: diagnose(instrument.as_ref(), &request.responses),
        warnings,
    }))
}

pub async fn score_body(
    Json(body): Json<BodyMeasurement>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let errors = validate_body(&body);
    if !errors.is_empty() {
        return Err(ApiError::invalid(&errors));
    }
    Ok(Json(score_body_measurement(&body)))
}

pub async fn score_face(
    Json(face): Json<FaceMeasurement>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let errors = validate_face(&face);
    if !errors.is_empty() {
        return Err(ApiError::invalid(&errors));
    }
    Ok(Json(score_face_measurement(&face)))
}

pub async fn integrate(
    Json(results): Json<ModalityResults>,
) -> Result<Json<AssessmentResult>, ApiError> {
    Ok(Json(fuse(&results)?))
}

/// The named instrument, or the configured default.
pub(crate) fn resolve_instrument(
    state: &AppState,
    id: Option<&str>,
) -> Result<Box<dyn Instrument>, ApiError> {
    let id = id.unwrap_or(&state.default_instrument);
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()).into())
}
