//! Configuration types for the seeding run.

use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;

/// Connection parameters for the target MySQL database.
///
/// Defaults point at the local development instance the rest of the project
/// assumes (`rbcs` database, root credentials).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    /// MySQL host.
    pub host: String,
    /// MySQL port.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            database: "rbcs".to_string(),
            user: "root".to_string(),
            password: "root".to_string(),
        }
    }
}

impl DbConfig {
    /// Builds sqlx connect options from these parameters.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_local_instance() {
        let config = DbConfig::default();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert_eq!(config.database, "rbcs");
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "root");
    }
}
