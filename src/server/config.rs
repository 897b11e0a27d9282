use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub struct Config {
    /// SeaORM connection string, e.g. `sqlite://clinic.db?mode=rwc`.
    pub database_url: String,
    pub bind_address: String,
    /// Insert the default doctors and services into empty tables at startup.
    pub seed_catalog: bool,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - `SEED_CATALOG` is not `true` or `false`
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            seed_catalog: match std::env::var("SEED_CATALOG") {
                Ok(value) => parse_flag("SEED_CATALOG", &value)?,
                Err(_) => false,
            },
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
