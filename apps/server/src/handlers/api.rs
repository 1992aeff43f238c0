//! JSON endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;
use oilmill_core::{BatchRow, Product, ProductProduction, SaleRow, Summary};

/// Body of `GET /api/summary`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDto {
    pub products: i64,
    pub produced_liters: f64,
    pub sold_liters: f64,
}

impl From<Summary> for SummaryDto {
    fn from(s: Summary) -> Self {
        SummaryDto {
            products: s.product_count,
            produced_liters: s.total_produced_liters,
            sold_liters: s.total_sold_liters,
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/summary`
pub async fn summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<SummaryDto>> {
    Ok(Json(state.ledger.summary().await?.into()))
}

/// `GET /api/products`
pub async fn products(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.ledger.list_products().await?))
}

/// `GET /api/batches`
pub async fn batches(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<BatchRow>>> {
    Ok(Json(state.ledger.list_batches().await?))
}

/// `GET /api/sales`
pub async fn sales(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<SaleRow>>> {
    Ok(Json(state.ledger.list_sales().await?))
}

/// `GET /api/production`
pub async fn production(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ProductProduction>>> {
    Ok(Json(state.ledger.produced_by_product().await?))
}
