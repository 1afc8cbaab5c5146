//! Catalog operations over the record store.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{error, info};

use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;
use pokedex_core::types::{PageRequest, PokemonId};
use pokedex_database::{PokemonStore, StoreError, StoreFault};
use pokedex_entity::pokemon::{CreatePokemon, Pokemon, UpdatePokemon, normalize_name};

/// One way of interpreting a lookup term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// The term is a national-dex number.
    Number,
    /// The term is a store identifier.
    Id,
    /// The term is a name, compared after normalization.
    Name,
}

/// Order in which [`PokemonService::find_one`] tries each strategy.
/// The first strategy that yields a record wins.
pub const LOOKUP_ORDER: [LookupStrategy; 3] = [
    LookupStrategy::Number,
    LookupStrategy::Id,
    LookupStrategy::Name,
];

/// Catalog service: create, look up, update, and delete records.
#[derive(Debug, Clone)]
pub struct PokemonService {
    /// Backing record store.
    store: Arc<dyn PokemonStore>,
    /// Page size used when a caller omits `limit`.
    default_limit: i64,
}

impl PokemonService {
    /// Creates a new catalog service.
    pub fn new(store: Arc<dyn PokemonStore>, default_limit: i64) -> Self {
        Self {
            store,
            default_limit,
        }
    }

    /// Page size applied when a listing omits `limit`.
    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    /// Backing store, for callers that need to validate identifiers.
    pub fn store(&self) -> &dyn PokemonStore {
        self.store.as_ref()
    }

    /// Insert one record. The name is normalized first.
    pub async fn create(&self, data: CreatePokemon) -> AppResult<Pokemon> {
        let data = data.normalized();
        let pokemon = self
            .store
            .insert_one(&data)
            .await
            .map_err(|e| self.translate(e))?;

        info!(id = %pokemon.id, name = %pokemon.name, number = pokemon.number, "Pokemon created");
        Ok(pokemon)
    }

    /// Insert a batch in one store operation. Either every record is
    /// stored or none is.
    pub async fn create_many(&self, data: Vec<CreatePokemon>) -> AppResult<Vec<Pokemon>> {
        let data: Vec<CreatePokemon> = data.into_iter().map(CreatePokemon::normalized).collect();
        let created = self
            .store
            .insert_many(&data)
            .await
            .map_err(|e| self.translate(e))?;

        info!(count = created.len(), "Pokemon batch created");
        Ok(created)
    }

    /// List records by ascending number.
    pub async fn find_all(&self, page: PageRequest) -> AppResult<Vec<Pokemon>> {
        let window = page.resolve(self.default_limit);
        self.store
            .find(window)
            .await
            .map_err(|e| storage_failure("Cannot list pokemon - Check server logs", e))
    }

    /// Resolve `term` by trying each entry of [`LOOKUP_ORDER`] in turn.
    pub async fn find_one(&self, term: &str) -> AppResult<Pokemon> {
        for strategy in LOOKUP_ORDER {
            if let Some(pokemon) = self.lookup(strategy, term).await? {
                return Ok(pokemon);
            }
        }

        Err(AppError::not_found(format!(
            "There is no pokemon with id: '{term}'"
        )))
    }

    async fn lookup(&self, strategy: LookupStrategy, term: &str) -> AppResult<Option<Pokemon>> {
        let found = match strategy {
            LookupStrategy::Number => match parse_number(term) {
                Some(number) => self.store.find_by_number(number).await,
                None => return Ok(None),
            },
            LookupStrategy::Id => match self.store.parse_id(term) {
                Some(id) => self.store.find_by_id(id).await,
                None => return Ok(None),
            },
            LookupStrategy::Name => self.store.find_by_name(&normalize_name(term)).await,
        };

        found.map_err(|e| storage_failure("Cannot find pokemon - Check server logs", e))
    }

    /// Apply a partial update to the record `term` resolves to.
    ///
    /// Returns the pre-update record overlaid with the patch, not a fresh
    /// read from the store.
    pub async fn update(&self, term: &str, patch: UpdatePokemon) -> AppResult<Pokemon> {
        let existing = self.find_one(term).await?;
        let patch = patch.normalized();

        if !patch.is_empty() {
            self.store
                .update_one(existing.id, &patch)
                .await
                .map_err(|e| self.translate(e))?;
        }

        info!(id = %existing.id, "Pokemon updated");
        Ok(patch.merge_onto(&existing))
    }

    /// Delete one record by identifier.
    pub async fn remove(&self, id: PokemonId) -> AppResult<()> {
        let deleted = self
            .store
            .delete_one(id)
            .await
            .map_err(|e| storage_failure("Cannot delete pokemon - Check server logs", e))?;

        if deleted == 0 {
            return Err(AppError::bad_request(format!(
                "No pokemon found with id: '{id}'"
            )));
        }

        info!(%id, "Pokemon deleted");
        Ok(())
    }

    /// Delete every record.
    pub async fn remove_many(&self) -> AppResult<()> {
        let deleted = self
            .store
            .delete_many()
            .await
            .map_err(|e| storage_failure("Cannot delete pokemon - Check server logs", e))?;

        info!(deleted, "Pokemon catalog cleared");
        Ok(())
    }

    /// Map a write failure to a caller-facing error.
    fn translate(&self, err: StoreError) -> AppError {
        match self.store.classify(&err) {
            StoreFault::DuplicateKey { key, value } => AppError::bad_request(format!(
                "Pokemon already exists. {}",
                duplicate_key_json(key, &value)
            )),
            StoreFault::Other => storage_failure("Cannot create pokemon - Check server logs", err),
        }
    }
}

/// Read `term` as a national-dex number.
///
/// Accepts decimal integers, `0x`/`0o`/`0b` literals, and any finite float
/// with no fractional part (`25.0`, `2.5e1`). Blank terms are not numbers.
fn parse_number(term: &str) -> Option<i32> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    if let Ok(number) = term.parse::<i32>() {
        return Some(number);
    }

    let radix = match term.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &term[2..];
        if digits.starts_with(['+', '-']) {
            return None;
        }
        return i64::from_str_radix(digits, radix)
            .ok()
            .and_then(|n| i32::try_from(n).ok());
    }

    let value = term.parse::<f64>().ok().filter(|v| v.is_finite() && v.fract() == 0.0)?;
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}

/// Log the store failure and return an internal error that does not
/// expose it.
fn storage_failure(message: &str, err: StoreError) -> AppError {
    error!(
        operation = err.operation,
        code = err.code.as_deref().unwrap_or("-"),
        error = %err,
        "Record store failure"
    );
    AppError::internal(message)
}

/// `{"<key>":<value>}`. Only the `number` key is rendered as a JSON number;
/// names stay strings even when they look numeric.
fn duplicate_key_json(key: String, value: &str) -> Value {
    let value = match (key.as_str(), value.parse::<i64>()) {
        ("number", Ok(n)) => Value::from(n),
        _ => Value::from(value),
    };
    let mut map = Map::new();
    map.insert(key, value);
    Value::Object(map)
}
