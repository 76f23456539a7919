//! Test data generation for rbcs.
//!
//! This crate provides tools for generating synthetic accounts and deposit
//! transactions to support manual verification and integration testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let pool = MySqlPoolOptions::new()
//!     .connect_with(DbConfig::default().connect_options())
//!     .await?;
//!
//! let mut rng = rand::thread_rng();
//! let accounts = AccountGenerator::new().generate_batch(10_000, &mut rng);
//!
//! let summary = Seeder::new(pool)
//!     .seed(&accounts, &TransactionGenerator::new(), &mut rng)
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::DbConfig;
    pub use crate::db::{SeedError, SeedSummary, Seeder};
    pub use crate::generators::{
        AccountGenerator, AccountStatus, GeneratedAccount, GeneratedTransaction,
        TransactionGenerator, TransactionStatus, TransactionType,
    };
}
