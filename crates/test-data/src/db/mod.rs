//! Database integration for seeding test data.
//!
//! The [`Seeder`] inserts generated test data into MySQL with batched
//! multi-row statements, all inside a single committed transaction.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
