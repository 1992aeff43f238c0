//! Sale pages and forms.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Form;

use super::{outcome, page, redirect_with_flash};
use crate::error::ApiResult;
use crate::render;
use crate::state::AppState;
use oilmill_core::SaleForm;

/// `GET /sales`
pub async fn list(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Response> {
    let options = state.ledger.product_options().await?;
    let rows = state.ledger.list_sales().await?;
    Ok(page(&state, &headers, "Sales", &render::sales_page(&rows, &options)))
}

/// `POST /sales`
pub async fn record(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SaleForm>,
) -> ApiResult<Response> {
    let result = state.ledger.record_sale(&form).await;
    redirect_with_flash(&state, "/sales", &outcome(&result, "Sale recorded"))
}
