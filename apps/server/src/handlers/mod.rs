//! HTTP handlers.
//!
//! Page handlers render HTML and consume the pending flash. Form handlers
//! run one ledger write, turn its outcome into a flash, and redirect back to
//! the list page (POST → 303 → GET). JSON handlers live in [`api`].

pub mod api;
pub mod batches;
pub mod dashboard;
pub mod products;
pub mod sales;

use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::{error, warn};

use crate::error::ApiResult;
use crate::flash::{self, Flash};
use crate::ledger::{LedgerError, LedgerResult};
use crate::render;
use crate::state::AppState;

/// Renders a full page, consuming any pending flash.
pub(crate) fn page(state: &AppState, headers: &HeaderMap, title: &str, body: &str) -> Response {
    let pending = state.flash.take(headers);
    let html = Html(render::layout(title, pending.as_ref(), body));

    match pending {
        Some(_) => ([(SET_COOKIE, flash::clear_cookie())], html).into_response(),
        None => html.into_response(),
    }
}

/// Maps a write result to its flash, logging storage failures.
pub(crate) fn outcome<T>(result: &LedgerResult<T>, success: &str) -> Flash {
    if let Err(LedgerError::Storage(e)) = result {
        if e.is_constraint_violation() {
            warn!(error = %e, "Write rejected by storage constraint");
        } else {
            error!(error = %e, "Ledger write failed");
        }
    }
    Flash::from_outcome(result, success)
}

/// Redirects to a list page carrying the outcome of a write.
pub(crate) fn redirect_with_flash(
    state: &AppState,
    to: &'static str,
    flash: &Flash,
) -> ApiResult<Response> {
    let cookie = state.flash.set_cookie(flash)?;
    Ok(([(SET_COOKIE, cookie)], Redirect::to(to)).into_response())
}
