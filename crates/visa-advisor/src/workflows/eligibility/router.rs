use std::io::Cursor;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Form, Json, Router,
};
use tracing::info;

use crate::error::AppError;

use super::domain::RawProfile;
use super::evaluation::{EvaluationEngine, EvaluationResult};
use super::intake::ProfileImporter;
use super::strategy::{bands, StrategyBand};

/// Router builder exposing the evaluation endpoints.
pub fn eligibility_router(engine: Arc<EvaluationEngine>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/evaluate", post(evaluate_handler))
        .route("/api/v1/eligibility/evaluate/form", post(evaluate_form_handler))
        .route("/api/v1/eligibility/batch", post(batch_handler))
        .route("/api/v1/eligibility/bands", get(bands_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<EvaluationEngine>>,
    Json(profile): Json<RawProfile>,
) -> Json<EvaluationResult> {
    Json(engine.evaluate_raw(&profile))
}

pub(crate) async fn evaluate_form_handler(
    State(engine): State<Arc<EvaluationEngine>>,
    Form(profile): Form<RawProfile>,
) -> Json<EvaluationResult> {
    Json(engine.evaluate_raw(&profile))
}

/// Evaluates every row of an uploaded CSV export, in row order.
pub(crate) async fn batch_handler(
    State(engine): State<Arc<EvaluationEngine>>,
    body: Bytes,
) -> Result<Json<Vec<EvaluationResult>>, AppError> {
    let profiles = ProfileImporter::from_reader(Cursor::new(body))?;
    info!(applicants = profiles.len(), "batch evaluation requested");

    let results = profiles
        .iter()
        .map(|profile| engine.evaluate_raw(profile))
        .collect();
    Ok(Json(results))
}

pub(crate) async fn bands_handler() -> Json<&'static [StrategyBand]> {
    Json(bands())
}
