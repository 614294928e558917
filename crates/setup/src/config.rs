use suitable_core::setup::credentials::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME,
};
use suitable_core::setup::orchestrator::{DEFAULT_PUBLIC_BASE_URL, DEFAULT_SERVER_START_COMMAND};
use suitable_core::setup::{AdminCredentials, NextSteps};

/// Default size of the setup connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid administrator credentials: {0}")]
    Credentials(#[from] suitable_core::error::CoreError),
}

/// Setup configuration loaded once at startup and passed to the orchestrator.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Credentials used only when no administrator exists yet.
    pub admin: AdminCredentials,
    /// Public URL of the backend, used in the next-step hints.
    pub public_base_url: String,
    /// Command shown as the way to start the server.
    pub server_start_command: String,
}

impl SetupConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                   |
    /// |------------------------|---------------------------|
    /// | `DATABASE_URL`         | required                  |
    /// | `DB_MAX_CONNECTIONS`   | `5`                       |
    /// | `ADMIN_USERNAME`       | `admin`                   |
    /// | `ADMIN_EMAIL`          | `admin@example.com`       |
    /// | `ADMIN_PASSWORD`       | `admin123`                |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:8000`   |
    /// | `SERVER_START_COMMAND` | `suitable-server`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database_url = lookup("DATABASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DB_MAX_CONNECTIONS",
                    expected: "a positive integer",
                    value: raw,
                })?,
        };

        let admin = AdminCredentials::new(
            var("ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            var("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            var("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
        );
        admin.check()?;

        let public_base_url = var("PUBLIC_BASE_URL", DEFAULT_PUBLIC_BASE_URL);
        if !(public_base_url.starts_with("http://") || public_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "PUBLIC_BASE_URL",
                expected: "an http(s) URL",
                value: public_base_url,
            });
        }

        Ok(Self {
            database_url,
            max_connections,
            admin,
            public_base_url,
            server_start_command: var("SERVER_START_COMMAND", DEFAULT_SERVER_START_COMMAND),
        })
    }

    pub fn next_steps(&self) -> NextSteps {
        NextSteps::new(&self.public_base_url, &self.server_start_command)
    }
}
