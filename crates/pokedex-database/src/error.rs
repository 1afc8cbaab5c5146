//! Store-side errors and their classification.
//!
//! Stores report failures as [`StoreError`], carrying whatever
//! backend-specific code and detail they have. Each store also implements
//! `PokemonStore::classify`, which is the only place that understands
//! those codes; callers act on the resulting [`StoreFault`].

use thiserror::Error;

/// A failed store operation.
#[derive(Debug, Error)]
#[error("{operation} failed: {message}")]
pub struct StoreError {
    /// Name of the store operation, e.g. `"insert_one"`.
    pub operation: &'static str,
    /// Human-readable description from the backend.
    pub message: String,
    /// Backend error code (SQLSTATE for PostgreSQL).
    pub code: Option<String>,
    /// Backend detail line, e.g. `Key (name)=(pikachu) already exists.`
    pub detail: Option<String>,
    /// Constraint that was violated, if the backend reports one.
    pub constraint: Option<String>,
    /// Underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create an error with no backend code.
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
            code: None,
            detail: None,
            constraint: None,
            source: None,
        }
    }

    /// Attach a backend error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach a backend detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the violated constraint name.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// Backend-independent category of a [`StoreError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFault {
    /// A unique key collided with an existing record.
    DuplicateKey {
        /// Field that collided (`name` or `number`).
        key: String,
        /// Conflicting value, as reported by the backend.
        value: String,
    },
    /// Anything else.
    Other,
}
