//! Dashboard: ledger totals and production per product.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;

use super::page;
use crate::error::ApiResult;
use crate::render;
use crate::state::AppState;

/// `GET /`
pub async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Response> {
    let summary = state.ledger.summary().await?;
    let production = state.ledger.produced_by_product().await?;

    Ok(page(
        &state,
        &headers,
        "Dashboard",
        &render::dashboard(&summary, &production),
    ))
}
