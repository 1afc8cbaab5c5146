//! Pokémon domain entities.

pub mod model;
pub mod name;

pub use model::{CreatePokemon, Pokemon, UpdatePokemon};
pub use name::normalize_name;
