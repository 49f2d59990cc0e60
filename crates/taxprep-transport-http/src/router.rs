//! Axum router for the taxprep HTTP API.
//!
//! Public routes: `GET /health`, `POST /licenses/verify`. Every other route
//! sits behind the bearer gate. All routes except `/health` are mounted
//! under the optional API prefix.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{auth, handlers};

/// Shared state threaded through all axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The only license id verification accepts.
    pub valid_license_id: Arc<str>,
    /// Route prefix (empty, or "/segment" without trailing slash).
    pub api_prefix: Arc<str>,
}

impl AppState {
    /// Creates state for the given license id and route prefix.
    pub fn new(
        valid_license_id: impl Into<Arc<str>>,
        api_prefix: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            valid_license_id: valid_license_id.into(),
            api_prefix: api_prefix.into(),
        }
    }
}

/// Builds the axum `Router` with all API routes.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/licenses/current", get(handlers::handle_current_license))
        .route("/licenses/purchase", post(handlers::handle_purchase))
        .route("/certificates", get(handlers::handle_list_certificates))
        .route(
            "/certificates/:certificate_id/download",
            get(handlers::handle_download_certificate),
        )
        .route("/badges", get(handlers::handle_list_badges))
        .route_layer(middleware::from_fn(auth::require_bearer));

    let api = Router::new()
        .route("/licenses/verify", post(handlers::handle_verify))
        .merge(protected);

    let api = if state.api_prefix.is_empty() {
        api
    } else {
        Router::new().nest(&state.api_prefix, api)
    };

    Router::new()
        .route("/health", get(handlers::handle_health))
        .merge(api)
        .fallback(handlers::handle_not_found)
        .layer(middleware::map_response(handlers::json_method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
