//! Ledger handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use rivela_core::{FinancialEntry, NewEntry, Totals};

/// GET /api/entries - List the ledger in insertion order
pub async fn list_entries(State(state): State<Arc<AppState>>) -> Json<Vec<FinancialEntry>> {
    let engine = state.engine.lock().await;
    Json(engine.entries().to_vec())
}

/// POST /api/entries - Record a new entry
///
/// Unknown kinds are rejected with 400 and leave the ledger untouched.
pub async fn add_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewEntry>,
) -> Result<Json<FinancialEntry>, AppError> {
    let mut engine = state.engine.lock().await;
    let entry = engine.add_entry(&req.kind, req.amount, req.category)?;
    Ok(Json(entry))
}

/// GET /api/entries/totals - Totals per entry kind
pub async fn get_totals(State(state): State<Arc<AppState>>) -> Json<Totals> {
    let engine = state.engine.lock().await;
    Json(engine.totals())
}
