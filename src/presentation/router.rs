// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_view, health_check, hover_view, leave_view, mount_view, overview, regenerate_view,
    unmount_view,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/overview", get(overview))
        .route("/views", post(mount_view))
        .route("/views/:id", get(get_view).delete(unmount_view))
        .route("/views/:id/hover", post(hover_view))
        .route("/views/:id/leave", post(leave_view))
        .route("/views/:id/regenerate", post(regenerate_view))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
