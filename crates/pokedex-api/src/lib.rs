//! # pokedex-api
//!
//! HTTP API layer for the Pokedex catalog built on Axum.
//!
//! Provides the REST endpoints under `/api/v2`, request validation,
//! CORS and request logging middleware, and the error-to-status mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
