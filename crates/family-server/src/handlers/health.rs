use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    family: String,
    members: usize,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let family = state.family.family_name().await?;
    let members = state.family.member_count().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        family,
        members,
    }))
}
