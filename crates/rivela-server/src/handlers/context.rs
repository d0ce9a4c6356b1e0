//! Emotional context and profile handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, SuccessResponse};
use rivela_core::{Archetype, EmotionalContext};

/// Current emotional state of the session
#[derive(Serialize)]
pub struct ContextResponse {
    pub context: Option<EmotionalContext>,
    pub archetype: Option<&'static Archetype>,
    pub age: Option<u32>,
}

/// Request body for setting the emotional context
#[derive(Debug, Deserialize)]
pub struct SetContextRequest {
    pub energy: u8,
    pub stress: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Local capture time; defaults to the server's wall clock
    pub captured_at: Option<NaiveDateTime>,
}

/// Request body for updating the profile
#[derive(Debug, Deserialize)]
pub struct SetProfileRequest {
    pub age: Option<u32>,
}

fn check_score(name: &str, value: u8) -> Result<(), AppError> {
    if (1..=10).contains(&value) {
        Ok(())
    } else {
        Err(AppError::bad_request(&format!(
            "{} must be between 1 and 10, got {}",
            name, value
        )))
    }
}

/// GET /api/context - Current context, archetype and age
pub async fn get_context(State(state): State<Arc<AppState>>) -> Json<ContextResponse> {
    let engine = state.engine.lock().await;
    Json(ContextResponse {
        context: engine.context().cloned(),
        archetype: engine.archetype(),
        age: engine.age(),
    })
}

/// PUT /api/context - Replace the emotional context and re-classify
pub async fn set_context(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetContextRequest>,
) -> Result<Json<ContextResponse>, AppError> {
    check_score("energy", req.energy)?;
    check_score("stress", req.stress)?;

    let mut engine = state.engine.lock().await;
    match req.captured_at {
        Some(at) => engine.set_emotional_context_at(req.energy, req.stress, req.tags, at),
        None => engine.set_emotional_context(req.energy, req.stress, req.tags),
    };

    Ok(Json(ContextResponse {
        context: engine.context().cloned(),
        archetype: engine.archetype(),
        age: engine.age(),
    }))
}

/// PUT /api/profile - Set or clear the user's age
pub async fn set_profile(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetProfileRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    if matches!(req.age, Some(age) if age > 120) {
        return Err(AppError::bad_request("age must be at most 120"));
    }

    state.engine.lock().await.set_age(req.age);
    Ok(Json(SuccessResponse { success: true }))
}
