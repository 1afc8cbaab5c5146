//! Custom Axum extractors.

pub mod pagination;
pub mod validated;

pub use pagination::PaginationParams;
pub use validated::{ValidatedJson, ValidatedQuery};
