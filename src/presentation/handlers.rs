// HTTP request handlers
use crate::application::view_service::{ViewError, ViewId};
use crate::infrastructure::json_mapper::{
    hover_to_json, overview_to_json, view_to_json, HoverJson, OverviewJson, ViewJson,
};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct HoverRequest {
    /// Pointer position on the time axis; absent when nothing is under the pointer.
    #[serde(default)]
    pub x: Option<i64>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Navigation, summary cards and chart descriptor
pub async fn overview(State(state): State<Arc<AppState>>) -> Json<OverviewJson> {
    Json(overview_to_json(state.overview_service.overview()))
}

/// Mount a chart view with a freshly generated series
pub async fn mount_view(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<ViewJson>), StatusCode> {
    match state.view_service.mount().await {
        Ok(snapshot) => Ok((StatusCode::CREATED, Json(view_to_json(snapshot)))),
        Err(e) => Err(error_status(e)),
    }
}

pub async fn get_view(
    Path(id): Path<ViewId>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ViewJson>, StatusCode> {
    state
        .view_service
        .snapshot(id)
        .await
        .map(|snapshot| Json(view_to_json(snapshot)))
        .map_err(error_status)
}

pub async fn hover_view(
    Path(id): Path<ViewId>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<HoverRequest>,
) -> Result<Json<HoverJson>, StatusCode> {
    state
        .view_service
        .hover(id, request.x)
        .await
        .map(|outcome| Json(hover_to_json(outcome)))
        .map_err(error_status)
}

pub async fn leave_view(
    Path(id): Path<ViewId>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<HoverJson>, StatusCode> {
    state
        .view_service
        .leave(id)
        .await
        .map(|outcome| Json(hover_to_json(outcome)))
        .map_err(error_status)
}

pub async fn regenerate_view(
    Path(id): Path<ViewId>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ViewJson>, StatusCode> {
    state
        .view_service
        .regenerate(id)
        .await
        .map(|snapshot| Json(view_to_json(snapshot)))
        .map_err(error_status)
}

pub async fn unmount_view(
    Path(id): Path<ViewId>,
    State(state): State<Arc<AppState>>,
) -> StatusCode {
    match state.view_service.unmount(id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => error_status(e),
    }
}

fn error_status(error: ViewError) -> StatusCode {
    match error {
        ViewError::NotFound(id) => {
            tracing::warn!("Request for unknown view {}", id);
            StatusCode::NOT_FOUND
        }
        ViewError::Series(e) => {
            tracing::error!("Series generation failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
