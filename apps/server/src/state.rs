//! # Application State
//!
//! Everything a handler needs, built once at startup and shared read-only.
//!
//! ## Thread Safety
//! Nothing in here is mutable: the ledger holds only connection options and
//! the flash signer holds only the secret. Handlers share it through `Arc`
//! without locking.

use std::sync::Arc;

use oilmill_db::Database;

use crate::config::ServerConfig;
use crate::flash::FlashSigner;
use crate::ledger::Ledger;

/// Shared application state.
pub struct AppState {
    pub ledger: Ledger,
    pub flash: FlashSigner,
}

impl AppState {
    pub fn new(config: &ServerConfig, db: Database) -> Arc<Self> {
        Arc::new(AppState {
            ledger: Ledger::new(db),
            flash: FlashSigner::new(config.secret_key.as_str()),
        })
    }
}
