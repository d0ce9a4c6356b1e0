//! Analysis and history handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use rivela_core::{AnalysisRecord, HealthTier};

/// Maximum question length in characters
const MAX_QUESTION_LEN: usize = 500;

/// Request body for running an analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub question: String,
}

/// Compact history row
#[derive(Serialize)]
pub struct HistorySummary {
    pub id: u64,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub persona: &'static str,
    pub archetype: Option<&'static str>,
    pub health_score: u8,
    pub health_tier: HealthTier,
}

impl From<&AnalysisRecord> for HistorySummary {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            id: record.id,
            question: record.question.clone(),
            created_at: record.created_at,
            persona: record.persona.id,
            archetype: record.archetype.map(|a| a.id),
            health_score: record.health.score,
            health_tier: record.health.tier,
        }
    }
}

/// POST /api/analyze - Answer a question against the current state
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Arc<AnalysisRecord>>, AppError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(AppError::bad_request("question must not be empty"));
    }
    if question.chars().count() > MAX_QUESTION_LEN {
        return Err(AppError::bad_request(&format!(
            "question must be at most {} characters",
            MAX_QUESTION_LEN
        )));
    }

    let record = state.engine.lock().await.analyze(question);
    Ok(Json(record))
}

/// GET /api/history - Every retained analysis, oldest first
pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistorySummary>> {
    let engine = state.engine.lock().await;
    Json(
        engine
            .history()
            .iter()
            .map(|r| HistorySummary::from(r.as_ref()))
            .collect(),
    )
}

/// GET /api/history/:id - A single analysis record
pub async fn get_history_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Arc<AnalysisRecord>>, AppError> {
    let record = state.engine.lock().await.history_entry(id)?;
    Ok(Json(record))
}
