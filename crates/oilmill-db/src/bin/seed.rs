//! # Seed Data Generator
//!
//! Populates the ledger with demo products, batches and sales for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed ./data.db with 30 days of activity (default)
//! cargo run -p oilmill-db --bin seed
//!
//! # Custom number of days and database path
//! cargo run -p oilmill-db --bin seed -- --days 90 --db ./dev.db
//! ```

use chrono::{Duration, Utc};
use std::env;

use oilmill_core::{NewBatch, NewProduct, NewSale, OilType};
use oilmill_db::{Database, DbConfig};

/// Demo products: (name, oil type, base liters per batch, price per liter).
const PRODUCTS: &[(&str, OilType, f64, f64)] = &[
    ("Cold Pressed Groundnut", OilType::Groundnut, 120.0, 210.0),
    ("Virgin Coconut", OilType::Coconut, 80.0, 340.0),
    ("Wood Pressed Gingelly", OilType::Gingelly, 60.0, 420.0),
];

const CUSTOMERS: &[&str] = &["Ravi Stores", "Lakshmi Traders", "", "Green Mart"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut days: i64 = 30;
    let mut db_path = String::from("data.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--days" if i + 1 < args.len() => {
                days = args[i + 1].parse()?;
                i += 2;
            }
            "--db" if i + 1 < args.len() => {
                db_path = args[i + 1].clone();
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: seed [--days N] [--db PATH]");
                std::process::exit(2);
            }
        }
    }

    println!("Seeding {db_path} with {days} days of activity");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let today = Utc::now().date_naive();

    for (p_idx, &(name, oil_type, base_liters, price)) in PRODUCTS.iter().enumerate() {
        let product = db
            .products()
            .insert(&NewProduct {
                name: name.to_string(),
                oil_type,
            })
            .await?;

        for day in 0..days {
            let date = today - Duration::days(days - day);
            let seed = (day as usize) * 7 + p_idx * 13;

            // One pressing every third day, sales every day.
            if day % 3 == 0 {
                db.batches()
                    .insert(&NewBatch {
                        product_id: product.id,
                        batch_date: date,
                        quantity_liters: base_liters + (seed % 20) as f64,
                        cost_per_liter: (price * 0.6).round(),
                    })
                    .await?;
            }

            let customer = CUSTOMERS[seed % CUSTOMERS.len()];
            db.sales()
                .insert(&NewSale {
                    product_id: product.id,
                    sale_date: date,
                    quantity_liters: 5.0 + (seed % 15) as f64,
                    price_per_liter: price,
                    customer: (!customer.is_empty()).then(|| customer.to_string()),
                })
                .await?;
        }
    }

    let summary = db.reports().summary().await?;
    println!();
    println!("Products: {}", summary.product_count);
    println!("Produced: {:.1} L", summary.total_produced_liters);
    println!("Sold:     {:.1} L", summary.total_sold_liters);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
