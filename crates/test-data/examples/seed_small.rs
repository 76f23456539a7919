//! Example: Seed a small, reproducible batch of accounts.
//!
//! This creates a fixed-seed run for eyeballing the inserted rows:
//! - 100 accounts with random numbers and balances
//! - One completed deposit per account, amounts scaled by account id
//!
//! Run with:
//! ```
//! cargo run -p test-data --example seed_small
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::mysql::MySqlPoolOptions;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Connect to the local database
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_with(DbConfig::default().connect_options())
        .await?;

    tracing::info!("Connected to database");

    // Fixed seed so reruns generate the same accounts
    let mut rng = StdRng::seed_from_u64(12345);

    let accounts = AccountGenerator::new().generate_batch(100, &mut rng);

    let summary = Seeder::new(pool)
        .seed(&accounts, &TransactionGenerator::new(), &mut rng)
        .await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Accounts: {}", summary.accounts);
    tracing::info!("  Transactions: {}", summary.transactions);

    Ok(())
}
