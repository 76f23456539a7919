//! Entity generators for test data.
//!
//! This module provides generators for creating synthetic banking entities:
//! - [`AccountGenerator`]: Generate accounts with random numbers and balances
//! - [`TransactionGenerator`]: Create one completed deposit per account

pub mod account;
pub mod transaction;

pub use account::{AccountGenConfig, AccountGenerator, AccountStatus, GeneratedAccount};
pub use transaction::{
    GeneratedTransaction, TransactionGenConfig, TransactionGenerator, TransactionStatus,
    TransactionType,
};
