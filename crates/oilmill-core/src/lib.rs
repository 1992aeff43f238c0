//! # oilmill-core: Pure Domain Logic for the Oilmill Ledger
//!
//! This crate holds the ledger's domain model and the parse-and-validate
//! step that turns raw form fields into typed commands. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Oilmill Ledger Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 HTTP surface (apps/server, axum)                │   │
//! │  │     /products   /batches   /sales   /api/summary   /health      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw form fields                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ oilmill-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌───────────┐                │   │
//! │  │   │   types   │  │ validation  │  │   error   │                │   │
//! │  │   │  OilType  │  │ ProductForm │  │Validation │                │   │
//! │  │   │  Product  │  │ BatchForm   │  │  Error    │                │   │
//! │  │   │  Batch    │  │ SaleForm    │  │           │                │   │
//! │  │   └───────────┘  └─────────────┘  └───────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ NewProduct / NewBatch / NewSale        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 oilmill-db (Database Layer)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (OilType, Product, Batch, Sale, report rows)
//! - [`validation`] - Form parsing into typed commands
//! - [`error`] - Validation error type

pub mod error;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use types::*;
pub use validation::{BatchForm, ProductForm, SaleForm};
