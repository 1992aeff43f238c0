//! # Domain Types
//!
//! Core domain types used throughout the Oilmill Ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │              ┌─────────────────┐                                        │
//! │              │    Product      │                                        │
//! │              │  ─────────────  │                                        │
//! │              │  id (INTEGER)   │                                        │
//! │              │  name           │                                        │
//! │              │  oil_type       │                                        │
//! │              └───┬─────────┬───┘                                        │
//! │        1..*      │         │      1..*   (ON DELETE CASCADE)            │
//! │   ┌──────────────▼──┐   ┌──▼──────────────┐                             │
//! │   │     Batch       │   │      Sale       │                             │
//! │   │  ─────────────  │   │  ─────────────  │                             │
//! │   │  batch_date     │   │  sale_date      │                             │
//! │   │  quantity_liters│   │  quantity_liters│                             │
//! │   │  cost_per_liter │   │  price_per_liter│                             │
//! │   └─────────────────┘   │  customer?      │                             │
//! │                         └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entities are insert/delete-only records; none of them has a status.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Oil Type
// =============================================================================

/// The kind of oil a product is pressed from.
///
/// Stored as its variant name (`'Groundnut'`, `'Coconut'`, `'Gingelly'`);
/// the `products` table carries a CHECK constraint over the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum OilType {
    Groundnut,
    Coconut,
    /// Sesame oil.
    Gingelly,
}

impl OilType {
    /// Every oil type, in display order.
    pub const ALL: [OilType; 3] = [OilType::Groundnut, OilType::Coconut, OilType::Gingelly];

    /// Returns the stored/display name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OilType::Groundnut => "Groundnut",
            OilType::Coconut => "Coconut",
            OilType::Gingelly => "Gingelly",
        }
    }

    /// Names of all oil types, for error messages and select lists.
    pub fn names() -> Vec<&'static str> {
        OilType::ALL.iter().map(OilType::as_str).collect()
    }
}

impl fmt::Display for OilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an oil type by exact, case-sensitive name.
impl FromStr for OilType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OilType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "oil_type",
                allowed: OilType::names(),
            })
    }
}

// =============================================================================
// Entities
// =============================================================================

/// A product the mill produces and sells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub oil_type: OilType,
}

/// One production run of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Batch {
    pub id: i64,
    pub product_id: i64,
    pub batch_date: NaiveDate,
    pub quantity_liters: f64,
    pub cost_per_liter: f64,
}

/// One disposal of a product to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,
    pub product_id: i64,
    pub sale_date: NaiveDate,
    pub quantity_liters: f64,
    pub price_per_liter: f64,
    /// `None` when no customer was given; never an empty string.
    pub customer: Option<String>,
}

// =============================================================================
// Validated Commands
// =============================================================================
// Produced by the parsers in `validation`, consumed by the repositories.

/// A product ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Trimmed, non-empty.
    pub name: String,
    pub oil_type: OilType,
}

/// A batch ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBatch {
    pub product_id: i64,
    pub batch_date: NaiveDate,
    pub quantity_liters: f64,
    pub cost_per_liter: f64,
}

/// A sale ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub product_id: i64,
    pub sale_date: NaiveDate,
    pub quantity_liters: f64,
    pub price_per_liter: f64,
    pub customer: Option<String>,
}

// =============================================================================
// Read Models
// =============================================================================

/// A batch joined with its product, as shown in the batch list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BatchRow {
    pub id: i64,
    /// Owning product's name.
    pub product: String,
    pub oil_type: OilType,
    pub batch_date: NaiveDate,
    pub quantity_liters: f64,
    pub cost_per_liter: f64,
}

/// A sale joined with its product, as shown in the sale list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleRow {
    pub id: i64,
    pub product: String,
    pub oil_type: OilType,
    pub sale_date: NaiveDate,
    pub quantity_liters: f64,
    pub price_per_liter: f64,
    pub customer: Option<String>,
}

/// Entry in a product selection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductOption {
    pub id: i64,
    pub name: String,
}

/// Ledger-wide totals, computed on demand.
///
/// Sums are `0.0` on an empty ledger, never absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub product_count: i64,
    pub total_produced_liters: f64,
    pub total_sold_liters: f64,
}

/// Total production of one product (zero if it has no batches).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductProduction {
    pub id: i64,
    pub name: String,
    pub oil_type: OilType,
    pub produced_liters: f64,
}
