//! Table bootstrap for the PostgreSQL store.
//!
//! The catalog owns a single table. It is created on boot if missing;
//! there is no versioned migration history.

use sqlx::PgPool;
use tracing::info;

use pokedex_core::error::{AppError, ErrorKind};

/// Unique constraint on `pokemon.name`.
pub const NAME_CONSTRAINT: &str = "pokemon_name_key";
/// Unique constraint on `pokemon.number`.
pub const NUMBER_CONSTRAINT: &str = "pokemon_number_key";

const CREATE_POKEMON_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS pokemon (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    number INTEGER NOT NULL,
    version INTEGER NOT NULL DEFAULT 0,
    CONSTRAINT pokemon_name_key UNIQUE (name),
    CONSTRAINT pokemon_number_key UNIQUE (number),
    CONSTRAINT pokemon_name_lowercase CHECK (name = lower(name))
)";

/// Create the `pokemon` table and its unique indexes if they do not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_POKEMON_TABLE)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to create pokemon table: {e}"),
                e,
            )
        })?;

    info!("Pokemon table ready");
    Ok(())
}

/// Map a unique-constraint name back to the column it guards.
pub fn constraint_column(constraint: &str) -> Option<&'static str> {
    match constraint {
        NAME_CONSTRAINT => Some("name"),
        NUMBER_CONSTRAINT => Some("number"),
        _ => None,
    }
}
