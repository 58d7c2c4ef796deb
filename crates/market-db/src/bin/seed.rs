//! # Store Seeder
//!
//! Resets a database file to the fixed catalog and admin roster.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p market-db --bin seed
//!
//! # Specify database path
//! cargo run -p market-db --bin seed -- --db ./data/market.db
//! ```
//!
//! The seeder always wipes and re-inserts: running it twice gives the same
//! state as running it once.

use std::env;

use market_db::{seed, Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./market.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Market Store Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./market.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Market Store Seeder");
    println!("======================");
    println!("Database: {}", db_path);
    println!();

    // Connect, migrate, then reset to the fixed catalog
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    seed::reset(db.pool()).await?;

    let products = db.inventory().count().await?;
    println!("✓ Seeded {} products, {} admins", products, seed::SEED_ADMINS.len());

    // Spot-check one record from each end of the catalog
    let milk = db.inventory().get(1643).await?;
    let turkey = db.inventory().get(1657).await?;
    println!("  {} @ {} ({} on shelf)", milk.name, milk.price(), milk.quantity);
    println!("  {} @ {} ({} on shelf)", turkey.name, turkey.price(), turkey.quantity);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
