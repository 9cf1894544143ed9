//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::PaletteStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub palette: Arc<PaletteStore>,
}

impl AppState {
    pub fn new(config: AppConfig, palette: PaletteStore) -> Self {
        Self {
            config: Arc::new(config),
            palette: Arc::new(palette),
        }
    }
}

/// Create application state from an asset loader.
///
/// A broken config falls back to defaults; a broken palette is fatal.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    let palette = PaletteStore::load(&asset_loader)
        .map_err(|e| anyhow::anyhow!("Failed to load palette: {e}"))?;

    Ok(AppState::new(config, palette))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Responses carry `Access-Control-Allow-Origin: *` so browser color
/// pickers on other origins can call the API.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/match", get(handle_match))
        .route("/api/convert", get(api::handle_convert))
        .route("/api/colors", get(handle_list_colors))
        .route("/api/colors/:code", get(handle_get_color))
        .route("/api/palette", get(handle_palette_summary))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_match(
    axum::extract::State(state): axum::extract::State<AppState>,
    query: axum::extract::Query<api::MatchQuery>,
) -> Result<axum::Json<api::MatchResponse>, ApiError> {
    api::handle_match(
        axum::extract::State(state.config),
        axum::extract::State(state.palette),
        query,
    )
    .await
}

async fn handle_list_colors(
    axum::extract::State(state): axum::extract::State<AppState>,
    query: axum::extract::Query<api::ColorsQuery>,
) -> Result<axum::Json<api::ColorListResponse>, ApiError> {
    api::handle_list_colors(
        axum::extract::State(state.config),
        axum::extract::State(state.palette),
        query,
    )
    .await
}

async fn handle_get_color(
    axum::extract::State(state): axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<axum::Json<api::SwatchResponse>, ApiError> {
    api::handle_get_color(axum::extract::State(state.palette), path).await
}

async fn handle_palette_summary(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::Json<api::PaletteSummary> {
    api::handle_palette_summary(
        axum::extract::State(state.config),
        axum::extract::State(state.palette),
    )
    .await
}
