//! Catalog reseeding from the upstream listing.

pub mod response;
pub mod service;

pub use response::{PokeApiEntry, PokeApiPage};
pub use service::SeedService;
