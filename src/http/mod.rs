//! HTTP transport: axum router, shared state and the resource handlers.

pub mod auth;
mod clients;
mod dashboard;
mod invoices;
mod leads;
mod projects;

use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, patch};
use axum::{Json, Router, middleware};
use chrono::Utc;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Database;

/// Shared state for all handlers.
pub struct AppState {
    pub db: Database,
    pub auth_secret: String,
}

/// Build the full application router.
pub fn router(state: Arc<AppState>, config: &Config) -> Router {
    let protected = Router::new()
        .route("/clients", get(clients::list).post(clients::create))
        .route(
            "/clients/{id}",
            get(clients::get_one).put(clients::update).delete(clients::remove),
        )
        .route("/projects", get(projects::list).post(projects::create))
        .route(
            "/projects/{id}",
            get(projects::get_one).put(projects::update).delete(projects::remove),
        )
        .route("/invoices", get(invoices::list).post(invoices::create))
        .route(
            "/invoices/{id}",
            get(invoices::get_one).put(invoices::update).delete(invoices::remove),
        )
        .route("/invoices/{id}/status", patch(invoices::update_status))
        .route("/leads", get(leads::list).post(leads::create))
        .route(
            "/leads/{id}",
            get(leads::get_one).put(leads::update).delete(leads::remove),
        )
        .route("/leads/{id}/status", patch(leads::update_status))
        .route("/dashboard/stats", get(dashboard::stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/api/health", get(health))
        .nest("/api", protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        // Last line of defense: a panicking handler still answers with a
        // generic 500 instead of dropping the connection.
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
