//! # pokedex-service
//!
//! Catalog operations over a [`PokemonStore`](pokedex_database::PokemonStore)
//! and the seed importer that refills the catalog from an upstream API.
//!
//! Services follow constructor injection: every dependency, including the
//! default page size, is handed over at construction time.

pub mod http;
pub mod pokemon;
pub mod seed;

pub use http::ReqwestHttpAdapter;
pub use pokemon::{LOOKUP_ORDER, LookupStrategy, PokemonService};
pub use seed::SeedService;
