//! # Validation Module
//!
//! Parses raw form fields into typed ledger commands.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP form (axum Form<BatchForm>)                             │
//! │  └── Every field arrives as text, possibly missing                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trim, default dates to today (UTC)                                │
//! │  ├── Parse ids, numbers, dates, oil types                              │
//! │  └── Result<NewBatch, ValidationError>                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── CHECK (oil_type IN (...)), CHECK (quantity_liters >= 0)           │
//! │  └── FOREIGN KEY (product_id) ... ON DELETE CASCADE                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Today" is passed in by the caller so parsing stays a pure function.
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use oilmill_core::validation::BatchForm;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let form = BatchForm {
//!     product_id: "7".into(),
//!     quantity_liters: "10".into(),
//!     cost_per_liter: "50".into(),
//!     ..Default::default()
//! };
//! let batch = form.parse(today).unwrap();
//! assert_eq!(batch.batch_date, today);
//! ```

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{NewBatch, NewProduct, NewSale, OilType};

/// Stored date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted quantity or per-liter amount. Keeps ledger totals finite.
pub const MAX_AMOUNT: f64 = 1e12;

/// Longest submitted value echoed back in an error message, in characters.
const ECHO_LIMIT: usize = 32;

// =============================================================================
// Forms
// =============================================================================

/// Raw fields of the "add product" form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub oil_type: String,
}

impl ProductForm {
    pub fn parse(&self) -> ValidationResult<NewProduct> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }

        let oil_type: OilType = self.oil_type.parse()?;

        Ok(NewProduct {
            name: name.to_string(),
            oil_type,
        })
    }
}

/// Raw fields of the "record batch" form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BatchForm {
    pub product_id: String,
    /// Empty means "today".
    pub batch_date: String,
    pub quantity_liters: String,
    pub cost_per_liter: String,
}

impl BatchForm {
    pub fn parse(&self, today: NaiveDate) -> ValidationResult<NewBatch> {
        Ok(NewBatch {
            product_id: parse_id("product_id", &self.product_id)?,
            batch_date: parse_date_or("batch_date", &self.batch_date, today)?,
            quantity_liters: parse_amount("quantity_liters", &self.quantity_liters)?,
            cost_per_liter: parse_amount("cost_per_liter", &self.cost_per_liter)?,
        })
    }
}

/// Raw fields of the "record sale" form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SaleForm {
    pub product_id: String,
    pub sale_date: String,
    pub quantity_liters: String,
    pub price_per_liter: String,
    pub customer: String,
}

impl SaleForm {
    pub fn parse(&self, today: NaiveDate) -> ValidationResult<NewSale> {
        Ok(NewSale {
            product_id: parse_id("product_id", &self.product_id)?,
            sale_date: parse_date_or("sale_date", &self.sale_date, today)?,
            quantity_liters: parse_amount("quantity_liters", &self.quantity_liters)?,
            price_per_liter: parse_amount("price_per_liter", &self.price_per_liter)?,
            customer: non_blank(&self.customer),
        })
    }
}

// =============================================================================
// Field Parsers
// =============================================================================

/// Parses an integer row id.
pub fn parse_id(field: &'static str, raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required { field });
    }

    raw.parse::<i64>().map_err(|_| {
        ValidationError::invalid_format(field, format!("'{}' is not an integer", echo(raw)))
    })
}

/// Parses a finite, non-negative quantity or per-liter amount.
pub fn parse_amount(field: &'static str, raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required { field });
    }

    let value = raw.parse::<f64>().map_err(|_| {
        ValidationError::invalid_format(field, format!("'{}' is not a number", echo(raw)))
    })?;

    if !value.is_finite() {
        return Err(ValidationError::invalid_format(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::invalid_format(
            field,
            format!("must not exceed {MAX_AMOUNT:e}"),
        ));
    }

    // -0 parses as negative zero; store it as plain zero.
    Ok(value + 0.0)
}

/// Parses a `YYYY-MM-DD` date, falling back to `default` when blank.
pub fn parse_date_or(
    field: &'static str,
    raw: &str,
    default: NaiveDate,
) -> ValidationResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        let reason = format!("'{}' is not a YYYY-MM-DD date", echo(raw));
        ValidationError::invalid_format(field, reason)
    })
}

/// Shortens a rejected value for display.
fn echo(raw: &str) -> String {
    match raw.char_indices().nth(ECHO_LIMIT) {
        Some((cut, _)) => format!("{}…", &raw[..cut]),
        None => raw.to_string(),
    }
}

/// Trims optional free text; blank becomes `None`.
pub fn non_blank(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}
