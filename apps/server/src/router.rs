//! Route table.
//!
//! [`build_router`] wires every handler to its path and attaches request
//! tracing. Page and form routes share a path per resource; JSON lives under
//! `/api`.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{api, batches, dashboard, products, sales};
use crate::state::AppState;

/// Builds the application router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages and forms
        .route("/", get(dashboard::index))
        .route("/products", get(products::list).post(products::add))
        .route("/products/{id}/delete", post(products::delete))
        .route("/batches", get(batches::list).post(batches::record))
        .route("/sales", get(sales::list).post(sales::record))
        // JSON
        .route("/health", get(api::health))
        .route("/api/summary", get(api::summary))
        .route("/api/products", get(api::products))
        .route("/api/batches", get(api::batches))
        .route("/api/sales", get(api::sales))
        .route("/api/production", get(api::production))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
