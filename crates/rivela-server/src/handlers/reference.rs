//! Liveness and read-only reference tables

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use rivela_core::{archetypes, Archetype, Conversion, Persona, ARCHETYPES, PERSONAS};

/// Upper bound for /api/conversions amounts
const MAX_CONVERSION_AMOUNT: f64 = 10_000_000.0;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ArchetypesResponse {
    pub archetypes: &'static [Archetype],
    pub default: &'static Archetype,
}

#[derive(Debug, Deserialize)]
pub struct DetectQuery {
    pub energy: u8,
    pub stress: u8,
}

#[derive(Serialize)]
pub struct DetectResponse {
    pub archetype: &'static Archetype,
    /// False when the scores fall outside every range and the default was used
    pub covered: bool,
}

#[derive(Debug, Deserialize)]
pub struct ConversionsQuery {
    pub amount: f64,
}

/// GET /api/health - Liveness
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/archetypes - The archetype table and its fallback
pub async fn list_archetypes() -> Json<ArchetypesResponse> {
    Json(ArchetypesResponse {
        archetypes: ARCHETYPES,
        default: &archetypes::DEFAULT_ARCHETYPE,
    })
}

/// GET /api/archetypes/detect?energy=&stress= - Classify without touching the session
pub async fn detect_archetype(Query(q): Query<DetectQuery>) -> Json<DetectResponse> {
    Json(DetectResponse {
        archetype: archetypes::detect(q.energy, q.stress),
        covered: archetypes::covers(q.energy, q.stress),
    })
}

/// GET /api/conversions?amount= - Tangible equivalents of an amount
pub async fn get_conversions(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ConversionsQuery>,
) -> Result<Json<Vec<Conversion>>, AppError> {
    if q.amount > MAX_CONVERSION_AMOUNT {
        return Err(AppError::bad_request("amount is too large"));
    }

    let conversions = state.engine.lock().await.convert(q.amount);
    Ok(Json(conversions))
}

/// GET /api/personas - The persona table
pub async fn list_personas() -> Json<&'static [Persona]> {
    Json(PERSONAS)
}
