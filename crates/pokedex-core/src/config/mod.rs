//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod catalog;
pub mod database;
pub mod logging;
pub mod seed;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::catalog::CatalogConfig;
pub use self::database::{DatabaseConfig, StoreConfig};
pub use self::logging::LoggingConfig;
pub use self::seed::SeedConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Deserialization target for the merged TOML files
/// (`config/default.toml` + environment overlay) and `POKEDEX__*`
/// environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Which record store backs the catalog.
    #[serde(default)]
    pub store: StoreConfig,
    /// Database connection settings (used by the `postgres` store).
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Catalog listing settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// External seed source settings.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` with the `config/{env}` overlay and
    /// environment variables prefixed with `POKEDEX__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("POKEDEX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the catalog unusable.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.catalog.default_limit < 1 {
            return Err(AppError::configuration(
                "catalog.default_limit must be at least 1",
            ));
        }
        if self.seed.page_size < 1 {
            return Err(AppError::configuration("seed.page_size must be at least 1"));
        }
        Ok(())
    }
}
