//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use swatchmatch::assets::AssetLoader;
use swatchmatch::models::AppConfig;
use swatchmatch::server::{build_router, create_app_state, AppState};
use swatchmatch::services::PaletteStore;

/// Test application with router and direct access to state
pub struct TestApp {
    router: axum::Router,
    pub palette: Arc<PaletteStore>,
    pub config: Arc<AppConfig>,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        Self::from_state(Self::create_state())
    }

    /// Create a test application serving the given palette JSON
    pub fn with_palette_json(json: &str) -> Self {
        Self::with_palette_and_config(json, AppConfig::default())
    }

    /// Create a test application with a custom palette and config
    pub fn with_palette_and_config(json: &str, config: AppConfig) -> Self {
        let palette = PaletteStore::from_json(json).expect("Invalid test palette");
        Self::from_state(AppState::new(config, palette))
    }

    /// Create application state from embedded assets
    pub fn create_state() -> AppState {
        let asset_loader = Arc::new(AssetLoader::new(None, None));
        create_app_state(asset_loader).expect("Failed to create app state")
    }

    /// Create a test application around existing state
    pub fn from_state(state: AppState) -> Self {
        let palette = state.palette.clone();
        let config = state.config.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self {
            router,
            palette,
            config,
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
