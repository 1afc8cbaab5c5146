//! The record-store contract and its implementations.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use pokedex_core::types::{PageWindow, PokemonId};
use pokedex_entity::pokemon::{CreatePokemon, Pokemon, UpdatePokemon};

use crate::error::{StoreError, StoreFault};

pub use memory::MemoryPokemonStore;
pub use postgres::PgPokemonStore;

/// Document-store operations the catalog service needs.
///
/// Payloads arrive already normalized; stores persist them as given.
/// Unique-key collisions on `name` or `number` must surface as a
/// [`StoreError`] that [`PokemonStore::classify`] maps to
/// [`StoreFault::DuplicateKey`].
#[async_trait]
pub trait PokemonStore: Send + Sync + std::fmt::Debug + 'static {
    /// Store type name, e.g. `"postgres"`.
    fn provider_type(&self) -> &str;

    /// Whether `raw` is a syntactically valid identifier for this store.
    fn parse_id(&self, raw: &str) -> Option<PokemonId>;

    /// Categorize a failure produced by this store.
    fn classify(&self, err: &StoreError) -> StoreFault;

    /// Insert one record and return it with its assigned id.
    async fn insert_one(&self, data: &CreatePokemon) -> Result<Pokemon, StoreError>;

    /// Insert a batch in one operation. Either every record is stored or
    /// none is. Returned records follow input order.
    async fn insert_many(&self, data: &[CreatePokemon]) -> Result<Vec<Pokemon>, StoreError>;

    /// Records ordered by ascending `number`, windowed by `window`.
    async fn find(&self, window: PageWindow) -> Result<Vec<Pokemon>, StoreError>;

    /// Look up by national-dex number.
    async fn find_by_number(&self, number: i32) -> Result<Option<Pokemon>, StoreError>;

    /// Look up by identifier.
    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, StoreError>;

    /// Look up by exact (already normalized) name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError>;

    /// Apply a partial update. Returns the number of records matched.
    async fn update_one(&self, id: PokemonId, patch: &UpdatePokemon) -> Result<u64, StoreError>;

    /// Delete one record. Returns the number of records deleted.
    async fn delete_one(&self, id: PokemonId) -> Result<u64, StoreError>;

    /// Delete every record. Returns the number of records deleted.
    async fn delete_many(&self) -> Result<u64, StoreError>;
}
