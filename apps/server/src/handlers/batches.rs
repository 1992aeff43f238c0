//! Production batch pages and forms.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Form;

use super::{outcome, page, redirect_with_flash};
use crate::error::ApiResult;
use crate::render;
use crate::state::AppState;
use oilmill_core::BatchForm;

/// `GET /batches`
pub async fn list(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Response> {
    let options = state.ledger.product_options().await?;
    let rows = state.ledger.list_batches().await?;
    Ok(page(&state, &headers, "Batches", &render::batches_page(&rows, &options)))
}

/// `POST /batches`
pub async fn record(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BatchForm>,
) -> ApiResult<Response> {
    let result = state.ledger.record_batch(&form).await;
    redirect_with_flash(&state, "/batches", &outcome(&result, "Batch recorded"))
}
