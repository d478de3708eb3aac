//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /auth/login`   - Open a session (public)
//! - `POST /auth/logout`  - Clear the session cookie (public)
//! - `GET  /health`       - Health check (public)
//! - everything else      - Session cookie required
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on the credential
//!   endpoints
//! - **Authentication** - Session cookie verification
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, login_handler, logout_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer());

    let public = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(logout_handler))
        .layer(rate_limit::secure_layer())
        .route("/health", get(health_handler));

    let router = Router::new()
        .merge(public)
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
