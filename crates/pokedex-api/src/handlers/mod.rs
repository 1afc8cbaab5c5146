//! Request handlers.

pub mod health;
pub mod pokemon;
pub mod seed;
