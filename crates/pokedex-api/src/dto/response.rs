//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pokedex_entity::pokemon::Pokemon;

/// A catalog record as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub id: Uuid,
    pub name: String,
    pub number: i32,
}

impl From<Pokemon> for PokemonResponse {
    fn from(pokemon: Pokemon) -> Self {
        Self {
            id: pokemon.id.into_uuid(),
            name: pokemon.name,
            number: pokemon.number,
        }
    }
}

/// Liveness probe reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Active record store, e.g. `"postgres"`.
    pub store: String,
}
