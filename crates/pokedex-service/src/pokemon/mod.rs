//! Catalog operations.

pub mod service;

pub use service::{LOOKUP_ORDER, LookupStrategy, PokemonService};
