//! # pokedex-core
//!
//! Core crate for the Pokedex catalog. Contains configuration schemas,
//! the typed record identifier, pagination types, the HTTP adapter seam,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Pokedex crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
