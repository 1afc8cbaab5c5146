//! # pokedex-entity
//!
//! Domain entity models for the Pokedex catalog. [`pokemon::Pokemon`] is
//! the stored row; the `Create*`/`Update*` structs are the write payloads
//! handed to the store.

pub mod pokemon;
