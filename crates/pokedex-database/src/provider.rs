//! Store selection from configuration.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use pokedex_core::config::{DatabaseConfig, StoreConfig};
use pokedex_core::error::{AppError, ErrorKind};
use pokedex_core::result::AppResult;

use crate::repositories::{MemoryPokemonStore, PgPokemonStore, PokemonStore};
use crate::schema::ensure_schema;

/// Build the record store named by `store.provider`.
///
/// The `postgres` store connects eagerly and creates its table if it is
/// missing, so a bad database URL fails the boot rather than the first
/// request.
pub async fn connect_store(
    store: &StoreConfig,
    database: &DatabaseConfig,
) -> AppResult<Arc<dyn PokemonStore>> {
    let inner: Arc<dyn PokemonStore> = match store.provider.as_str() {
        "postgres" => {
            info!("Initializing PostgreSQL record store");
            Arc::new(connect_postgres(database).await?)
        }
        "memory" => {
            info!("Initializing in-memory record store");
            Arc::new(MemoryPokemonStore::new())
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: memory, postgres"
            )));
        }
    };

    Ok(inner)
}

/// Open the pool and make sure the `pokemon` table exists.
async fn connect_postgres(database: &DatabaseConfig) -> AppResult<PgPokemonStore> {
    info!(
        max_connections = database.max_connections,
        min_connections = database.min_connections,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .acquire_timeout(Duration::from_secs(database.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(database.idle_timeout_seconds))
        .connect(&database.url)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    ensure_schema(&pool).await?;
    info!("PostgreSQL record store ready");
    Ok(PgPokemonStore::new(pool))
}
