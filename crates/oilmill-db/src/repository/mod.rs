//! # Repository Module
//!
//! Database repository implementations for the ledger.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Ledger operation                                                      │
//! │       │                                                                 │
//! │       │  db.batches().insert(&new_batch)                               │
//! │       ▼                                                                 │
//! │  BatchRepository                                                       │
//! │  ├── insert(&self, batch)                                              │
//! │  └── list(&self)                                                       │
//! │       │                                                                 │
//! │       │  acquire() → SQL → drop                                         │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product insert, list, delete (cascades)
//! - [`batch::BatchRepository`] - Production batch insert and list
//! - [`sale::SaleRepository`] - Sale insert and list
//! - [`report::ReportRepository`] - Summary and per-product production

pub mod batch;
pub mod product;
pub mod report;
pub mod sale;
