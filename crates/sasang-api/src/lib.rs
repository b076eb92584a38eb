//! sasang-api
//!
//! HTTP surface over the constitution scoring engine: instrument schemas,
//! stateless scoring, and saved assessments.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments (public schema data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        // Stateless scoring
        .route(
            "/score/questionnaire",
            post(routes::score::score_questionnaire),
        )
        .route("/score/body", post(routes::score::score_body))
        .route("/score/face", post(routes::score::score_face))
        .route("/score/integrate", post(routes::score::integrate))
        // Saved assessments
        .route(
            "/assessments",
            get(routes::assessments::list_assessments)
                .post(routes::assessments::create_assessment),
        )
        .route(
            "/assessments/{id}",
            get(routes::assessments::get_assessment)
                .put(routes::assessments::update_assessment)
                .delete(routes::assessments::delete_assessment),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
