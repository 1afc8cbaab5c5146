//! # pokedex-database
//!
//! The [`PokemonStore`] contract the catalog is written against, the
//! store-side error type and its classification, and two concrete stores:
//! PostgreSQL via sqlx and an in-process map.

pub mod error;
pub mod provider;
pub mod repositories;
pub mod schema;

pub use error::{StoreError, StoreFault};
pub use provider::connect_store;
pub use repositories::PokemonStore;
