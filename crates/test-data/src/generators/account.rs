//! Account generation.

use rand::Rng;
use time::OffsetDateTime;

/// Account lifecycle states matching the `account.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Initial,
    Activated,
    Frozen,
}

impl AccountStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Initial => "INITIAL",
            AccountStatus::Activated => "ACTIVATED",
            AccountStatus::Frozen => "FROZEN",
        }
    }
}

/// Generated account data ready for database insertion.
///
/// The `id` column is assigned by the database on insert and is therefore not
/// part of the generated tuple.
#[derive(Debug, Clone)]
pub struct GeneratedAccount {
    pub account_number: i64,
    pub balance: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub status: AccountStatus,
    pub version: i32,
}

/// Configuration for account generation.
#[derive(Debug, Clone)]
pub struct AccountGenConfig {
    /// Inclusive range account numbers are drawn from. Uniqueness is not
    /// enforced; collisions are possible and acceptable for fixture data.
    pub account_number_range: (i64, i64),
    /// Inclusive range balances are drawn from.
    pub balance_range: (i64, i64),
}

impl Default for AccountGenConfig {
    fn default() -> Self {
        Self {
            account_number_range: (100_000_000, 999_999_999),
            balance_range: (100, 1_000_000),
        }
    }
}

/// Generates synthetic accounts for seeding.
pub struct AccountGenerator {
    config: AccountGenConfig,
}

impl AccountGenerator {
    /// Creates a new account generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AccountGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: AccountGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single account.
    ///
    /// `created_at` and `updated_at` share one timestamp sample.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedAccount {
        let (number_lo, number_hi) = self.config.account_number_range;
        let (balance_lo, balance_hi) = self.config.balance_range;
        let now = OffsetDateTime::now_utc();

        GeneratedAccount {
            account_number: rng.gen_range(number_lo..=number_hi),
            balance: rng.gen_range(balance_lo..=balance_hi),
            created_at: now,
            updated_at: now,
            status: AccountStatus::Activated,
            version: 1,
        }
    }

    /// Generates multiple accounts.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedAccount> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for AccountGenerator {
    fn default() -> Self {
        Self::new()
    }
}
