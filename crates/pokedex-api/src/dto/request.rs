//! Request DTOs with validation.
//!
//! Bodies reject fields they do not declare.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use pokedex_entity::pokemon::{CreatePokemon, UpdatePokemon};

/// Create request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePokemonRequest {
    /// Name; stored lowercased.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// National-dex number.
    #[validate(range(min = 1, message = "number must be a positive integer"))]
    pub number: i32,
}

impl From<CreatePokemonRequest> for CreatePokemon {
    fn from(req: CreatePokemonRequest) -> Self {
        CreatePokemon::new(req.name, req.number)
    }
}

/// Bulk create body: a JSON array of create requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BulkCreatePokemonRequest(pub Vec<CreatePokemonRequest>);

impl Validate for BulkCreatePokemonRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        for item in &self.0 {
            item.validate()?;
        }
        Ok(())
    }
}

impl From<BulkCreatePokemonRequest> for Vec<CreatePokemon> {
    fn from(req: BulkCreatePokemonRequest) -> Self {
        req.0.into_iter().map(CreatePokemon::from).collect()
    }
}

/// Partial update body. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdatePokemonRequest {
    /// New name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New number.
    #[validate(range(min = 1, message = "number must be a positive integer"))]
    pub number: Option<i32>,
}

impl From<UpdatePokemonRequest> for UpdatePokemon {
    fn from(req: UpdatePokemonRequest) -> Self {
        UpdatePokemon {
            name: req.name,
            number: req.number,
        }
    }
}
