//! Seeds MySQL with synthetic accounts and deposit transactions.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed -- --count 10000
//! ```

use clap::Parser;
use sqlx::mysql::MySqlPoolOptions;
use test_data::config::DbConfig;
use test_data::db::Seeder;
use test_data::generators::{AccountGenerator, TransactionGenerator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Database server hostname.
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Database server port.
    #[arg(long, default_value_t = 3306)]
    port: u16,

    /// Database to seed.
    #[arg(long, default_value = "rbcs")]
    database: String,

    /// Database user.
    #[arg(long, default_value = "root")]
    user: String,

    /// Database password.
    #[arg(long, default_value = "root")]
    password: String,

    /// Number of accounts to insert, each with one deposit transaction.
    #[arg(long, default_value_t = 10_000)]
    count: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DbConfig {
        host: cli.host,
        port: cli.port,
        database: cli.database,
        user: cli.user,
        password: cli.password,
    };

    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_with(config.connect_options())
        .await?;

    tracing::info!("Connected to database");

    let mut rng = rand::thread_rng();
    let accounts = AccountGenerator::new().generate_batch(cli.count, &mut rng);

    let summary = Seeder::new(pool)
        .seed(&accounts, &TransactionGenerator::new(), &mut rng)
        .await?;

    tracing::info!(
        "Successfully inserted {} accounts and transactions",
        summary.accounts
    );

    Ok(())
}
