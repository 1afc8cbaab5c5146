//! PostgreSQL record store.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgDatabaseError;
use uuid::Uuid;

use pokedex_core::types::{PageWindow, PokemonId};
use pokedex_entity::pokemon::{CreatePokemon, Pokemon, UpdatePokemon};

use crate::error::{StoreError, StoreFault};
use crate::schema::constraint_column;

use super::PokemonStore;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

const COLUMNS: &str = "id, name, number, version";

/// Record store backed by the `pokemon` table.
#[derive(Debug, Clone)]
pub struct PgPokemonStore {
    pool: PgPool,
}

impl PgPokemonStore {
    /// Create a new store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PokemonStore for PgPokemonStore {
    fn provider_type(&self) -> &str {
        "postgres"
    }

    fn parse_id(&self, raw: &str) -> Option<PokemonId> {
        PokemonId::parse(raw)
    }

    fn classify(&self, err: &StoreError) -> StoreFault {
        if err.code.as_deref() != Some(UNIQUE_VIOLATION) {
            return StoreFault::Other;
        }

        if let Some((key, value)) = err.detail.as_deref().and_then(parse_key_detail) {
            return StoreFault::DuplicateKey { key, value };
        }

        let key = err
            .constraint
            .as_deref()
            .and_then(constraint_column)
            .unwrap_or("unknown");
        StoreFault::DuplicateKey {
            key: key.to_string(),
            value: String::new(),
        }
    }

    async fn insert_one(&self, data: &CreatePokemon) -> Result<Pokemon, StoreError> {
        sqlx::query_as::<_, Pokemon>(&format!(
            "INSERT INTO pokemon (id, name, number) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(PokemonId::new())
        .bind(&data.name)
        .bind(data.number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| from_sqlx("insert_one", e))
    }

    async fn insert_many(&self, data: &[CreatePokemon]) -> Result<Vec<Pokemon>, StoreError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = data.iter().map(|_| Uuid::new_v4()).collect();
        let names: Vec<&str> = data.iter().map(|p| p.name.as_str()).collect();
        let numbers: Vec<i32> = data.iter().map(|p| p.number).collect();

        // A single statement, so a collision anywhere rejects the whole batch.
        let rows = sqlx::query_as::<_, Pokemon>(&format!(
            "INSERT INTO pokemon (id, name, number) \
             SELECT * FROM UNNEST($1::uuid[], $2::text[], $3::int4[]) \
             RETURNING {COLUMNS}"
        ))
        .bind(&ids)
        .bind(&names)
        .bind(&numbers)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| from_sqlx("insert_many", e))?;

        let mut by_id: HashMap<PokemonId, Pokemon> =
            rows.into_iter().map(|row| (row.id, row)).collect();

        ids.into_iter()
            .map(|id| {
                by_id.remove(&PokemonId(id)).ok_or_else(|| {
                    StoreError::new("insert_many", format!("Inserted row {id} not returned"))
                })
            })
            .collect()
    }

    async fn find(&self, window: PageWindow) -> Result<Vec<Pokemon>, StoreError> {
        sqlx::query_as::<_, Pokemon>(&format!(
            "SELECT {COLUMNS} FROM pokemon ORDER BY number ASC LIMIT $1 OFFSET $2"
        ))
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| from_sqlx("find", e))
    }

    async fn find_by_number(&self, number: i32) -> Result<Option<Pokemon>, StoreError> {
        sqlx::query_as::<_, Pokemon>(&format!("SELECT {COLUMNS} FROM pokemon WHERE number = $1"))
            .bind(number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| from_sqlx("find_by_number", e))
    }

    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, StoreError> {
        sqlx::query_as::<_, Pokemon>(&format!("SELECT {COLUMNS} FROM pokemon WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| from_sqlx("find_by_id", e))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError> {
        sqlx::query_as::<_, Pokemon>(&format!("SELECT {COLUMNS} FROM pokemon WHERE name = $1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| from_sqlx("find_by_name", e))
    }

    async fn update_one(&self, id: PokemonId, patch: &UpdatePokemon) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE pokemon SET name = COALESCE($2, name), \
                                number = COALESCE($3, number), \
                                version = version + 1 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.number)
        .execute(&self.pool)
        .await
        .map_err(|e| from_sqlx("update_one", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_one(&self, id: PokemonId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| from_sqlx("delete_one", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_many(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM pokemon")
            .execute(&self.pool)
            .await
            .map_err(|e| from_sqlx("delete_many", e))?;

        Ok(result.rows_affected())
    }
}

/// Capture SQLSTATE, detail, and constraint from a sqlx error before it
/// is boxed away.
fn from_sqlx(operation: &'static str, err: sqlx::Error) -> StoreError {
    let mut store_err = StoreError::new(operation, err.to_string());

    if let sqlx::Error::Database(db_err) = &err {
        if let Some(code) = db_err.code() {
            store_err = store_err.with_code(code.into_owned());
        }
        if let Some(constraint) = db_err.constraint() {
            store_err = store_err.with_constraint(constraint);
        }
        if let Some(detail) = db_err
            .try_downcast_ref::<PgDatabaseError>()
            .and_then(|pg| pg.detail())
        {
            store_err = store_err.with_detail(detail);
        }
    }

    store_err.with_source(err)
}

/// Parse PostgreSQL's `Key (name)=(pikachu) already exists.` detail line.
fn parse_key_detail(detail: &str) -> Option<(String, String)> {
    let rest = detail.strip_prefix("Key (")?;
    let (key, rest) = rest.split_once(")=(")?;
    let (value, _) = rest.rsplit_once(')')?;
    Some((key.to_string(), value.to_string()))
}
