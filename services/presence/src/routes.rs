//! Presence service routes

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{
    error::ApiResult,
    models::{LoginReply, LogoutReply, PlayerIdRequest},
    state::AppState,
};

/// Create the router for the presence service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/presence/login", post(login))
        .route("/presence/logout", post(logout))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match &state.db_pool {
        Some(pool) => Some(common::database::health_check(pool).await.unwrap_or(false)),
        None => None,
    };
    let status = if database == Some(false) {
        "degraded"
    } else {
        "ok"
    };

    Json(json!({
        "status": status,
        "service": "presence-service",
        "database": database,
    }))
}

/// Player login endpoint
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<PlayerIdRequest>, JsonRejection>,
) -> ApiResult<Json<LoginReply>> {
    let Json(request) = payload?;
    Ok(Json(state.presence.login(&request.player_id).await))
}

/// Player logout endpoint
pub async fn logout(
    State(state): State<AppState>,
    payload: Result<Json<PlayerIdRequest>, JsonRejection>,
) -> ApiResult<Json<LogoutReply>> {
    let Json(request) = payload?;
    Ok(Json(state.presence.logout(&request.player_id).await))
}
