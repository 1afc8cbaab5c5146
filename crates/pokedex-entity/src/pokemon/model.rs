//! Pokémon entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pokedex_core::types::PokemonId;

use super::name::normalize_name;

/// A stored Pokémon record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Pokemon {
    /// Store-assigned identifier. Never changes.
    pub id: PokemonId,
    /// Unique, always lowercase.
    pub name: String,
    /// Unique national-dex number; default sort key.
    pub number: i32,
    /// Internal revision counter, bumped by every update.
    #[serde(skip_serializing, default)]
    pub version: i32,
}

/// Data required to create a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePokemon {
    /// Name as supplied; normalized before it reaches the store.
    pub name: String,
    /// National-dex number.
    pub number: i32,
}

impl CreatePokemon {
    /// Create a payload from raw parts.
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }

    /// Return the payload with its name in canonical form.
    pub fn normalized(self) -> Self {
        Self {
            name: normalize_name(&self.name),
            number: self.number,
        }
    }
}

/// Partial update: only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePokemon {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
}

impl UpdatePokemon {
    /// Return the patch with its name (if any) in canonical form.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.as_deref().map(normalize_name),
            number: self.number,
        }
    }

    /// Whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.number.is_none()
    }

    /// Overlay the patch onto `base`. Fields absent from the patch keep
    /// the value they had in `base`.
    pub fn merge_onto(&self, base: &Pokemon) -> Pokemon {
        Pokemon {
            id: base.id,
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            number: self.number.unwrap_or(base.number),
            version: base.version,
        }
    }
}
