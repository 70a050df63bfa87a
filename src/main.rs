// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::overview_service::OverviewService;
use crate::application::view_service::{ViewService, ViewSettings};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::random_source::UniformIntSource;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let offset = config.chart.utc_offset()?;
    let source = UniformIntSource::new(config.chart.value_min, config.chart.value_max)
        .context("chart value range is empty")?;

    // Create services (application layer)
    let overview_service = OverviewService::new(config.chart.clone(), config.summaries.clone());
    let view_service = ViewService::new(
        Arc::new(SystemClock),
        Arc::new(source),
        ViewSettings {
            day_count: config.chart.day_count,
            offset,
            chart: config.chart.descriptor(),
            max_views: config.views.max_mounted,
        },
    );

    // Create application state
    let state = Arc::new(AppState {
        overview_service,
        view_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid server.bind address: {}", config.server.bind))?;
    tracing::info!("Starting monitoring-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
