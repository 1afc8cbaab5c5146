//! Convenience result type alias for the Pokedex workspace.

use crate::error::AppError;

/// A specialized `Result` type for Pokedex operations.
pub type AppResult<T> = Result<T, AppError>;
