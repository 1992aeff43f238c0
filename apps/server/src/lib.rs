//! # Oilmill Server
//!
//! HTTP surface for the oilmill ledger: HTML pages with POST/redirect forms
//! for products, batches and sales, plus a small JSON API.
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  router ──► handlers ──► ledger ──► oilmill-db ──► SQLite               │
//! │                │                                                        │
//! │                ├──► render (HTML)                                       │
//! │                └──► flash (signed cookie)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod ledger;
pub mod render;
pub mod router;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use ledger::{Ledger, LedgerError};
pub use router::build_router;
pub use state::AppState;
