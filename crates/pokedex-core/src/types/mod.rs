//! Core type definitions used across the Pokedex workspace.

pub mod id;
pub mod pagination;

pub use id::PokemonId;
pub use pagination::{PageRequest, PageWindow};
