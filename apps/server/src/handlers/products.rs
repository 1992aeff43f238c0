//! Product pages and forms.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Form;

use super::{outcome, page, redirect_with_flash};
use crate::error::ApiResult;
use crate::render;
use crate::state::AppState;
use oilmill_core::ProductForm;

/// `GET /products`
pub async fn list(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Response> {
    let products = state.ledger.list_products().await?;
    Ok(page(&state, &headers, "Products", &render::products_page(&products)))
}

/// `POST /products`
pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProductForm>,
) -> ApiResult<Response> {
    let result = state.ledger.add_product(&form).await;
    redirect_with_flash(&state, "/products", &outcome(&result, "Product added"))
}

/// `POST /products/{id}/delete`
///
/// Deleting an id that is already gone still reports success.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Response> {
    let result = state.ledger.delete_product(id).await;
    redirect_with_flash(&state, "/products", &outcome(&result, "Product deleted"))
}
