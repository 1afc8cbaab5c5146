//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::{BulkCreatePokemonRequest, CreatePokemonRequest, UpdatePokemonRequest};
pub use response::{HealthResponse, PokemonResponse};
