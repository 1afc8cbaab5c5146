//! In-process record store.
//!
//! Enforces the same unique keys as the PostgreSQL table. All writes take
//! the single write lock, so the uniqueness check and the insert cannot
//! interleave with another writer.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use pokedex_core::types::{PageWindow, PokemonId};
use pokedex_entity::pokemon::{CreatePokemon, Pokemon, UpdatePokemon};

use crate::error::{StoreError, StoreFault};

use super::PokemonStore;

/// Error code used for unique-key collisions.
const DUPLICATE_KEY: &str = "duplicate_key";

/// Record store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryPokemonStore {
    records: RwLock<HashMap<PokemonId, Pokemon>>,
}

impl MemoryPokemonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// Find a record other than `except` that already holds `name` or `number`.
/// Names are checked across every record before any number is.
fn find_conflict<'a>(
    records: impl Iterator<Item = &'a Pokemon> + Clone,
    name: Option<&str>,
    number: Option<i32>,
    except: Option<PokemonId>,
) -> Option<(&'static str, String)> {
    let mut others = records.filter(|existing| Some(existing.id) != except);

    if let Some(name) = name {
        if others.clone().any(|existing| existing.name == name) {
            return Some(("name", name.to_string()));
        }
    }
    if let Some(number) = number {
        if others.any(|existing| existing.number == number) {
            return Some(("number", number.to_string()));
        }
    }
    None
}

fn duplicate(operation: &'static str, key: &str, value: &str) -> StoreError {
    StoreError::new(operation, format!("duplicate key {key}: {value}"))
        .with_code(DUPLICATE_KEY)
        .with_detail(format!("{key}={value}"))
}

#[async_trait]
impl PokemonStore for MemoryPokemonStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    fn parse_id(&self, raw: &str) -> Option<PokemonId> {
        PokemonId::parse(raw)
    }

    fn classify(&self, err: &StoreError) -> StoreFault {
        if err.code.as_deref() != Some(DUPLICATE_KEY) {
            return StoreFault::Other;
        }
        match err.detail.as_deref().and_then(|d| d.split_once('=')) {
            Some((key, value)) => StoreFault::DuplicateKey {
                key: key.to_string(),
                value: value.to_string(),
            },
            None => StoreFault::Other,
        }
    }

    async fn insert_one(&self, data: &CreatePokemon) -> Result<Pokemon, StoreError> {
        let mut records = self.records.write().await;

        if let Some((key, value)) =
            find_conflict(records.values(), Some(&data.name), Some(data.number), None)
        {
            return Err(duplicate("insert_one", key, &value));
        }

        let pokemon = Pokemon {
            id: PokemonId::new(),
            name: data.name.clone(),
            number: data.number,
            version: 0,
        };
        records.insert(pokemon.id, pokemon.clone());
        Ok(pokemon)
    }

    async fn insert_many(&self, data: &[CreatePokemon]) -> Result<Vec<Pokemon>, StoreError> {
        let mut records = self.records.write().await;
        let mut staged: Vec<Pokemon> = Vec::with_capacity(data.len());

        for item in data {
            let conflict = find_conflict(
                records.values().chain(staged.iter()),
                Some(&item.name),
                Some(item.number),
                None,
            );
            if let Some((key, value)) = conflict {
                debug!(staged = staged.len(), "Bulk insert rejected; nothing written");
                return Err(duplicate("insert_many", key, &value));
            }
            staged.push(Pokemon {
                id: PokemonId::new(),
                name: item.name.clone(),
                number: item.number,
                version: 0,
            });
        }

        for pokemon in &staged {
            records.insert(pokemon.id, pokemon.clone());
        }
        Ok(staged)
    }

    async fn find(&self, window: PageWindow) -> Result<Vec<Pokemon>, StoreError> {
        let records = self.records.read().await;
        let mut all: Vec<Pokemon> = records.values().cloned().collect();
        all.sort_by_key(|p| p.number);

        let offset = usize::try_from(window.offset).unwrap_or(0);
        let limit = usize::try_from(window.limit).unwrap_or(0);
        Ok(all.into_iter().skip(offset).take(limit).collect())
    }

    async fn find_by_number(&self, number: i32) -> Result<Option<Pokemon>, StoreError> {
        let records = self.records.read().await;
        Ok(records.values().find(|p| p.number == number).cloned())
    }

    async fn find_by_id(&self, id: PokemonId) -> Result<Option<Pokemon>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError> {
        let records = self.records.read().await;
        Ok(records.values().find(|p| p.name == name).cloned())
    }

    async fn update_one(&self, id: PokemonId, patch: &UpdatePokemon) -> Result<u64, StoreError> {
        let mut records = self.records.write().await;

        if !records.contains_key(&id) {
            return Ok(0);
        }

        if let Some((key, value)) =
            find_conflict(records.values(), patch.name.as_deref(), patch.number, Some(id))
        {
            return Err(duplicate("update_one", key, &value));
        }

        if let Some(pokemon) = records.get_mut(&id) {
            if let Some(name) = &patch.name {
                pokemon.name = name.clone();
            }
            if let Some(number) = patch.number {
                pokemon.number = number;
            }
            pokemon.version += 1;
        }
        Ok(1)
    }

    async fn delete_one(&self, id: PokemonId) -> Result<u64, StoreError> {
        Ok(u64::from(self.records.write().await.remove(&id).is_some()))
    }

    async fn delete_many(&self) -> Result<u64, StoreError> {
        let mut records = self.records.write().await;
        let count = records.len() as u64;
        records.clear();
        Ok(count)
    }
}
