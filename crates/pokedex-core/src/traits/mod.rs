//! Core traits defined in `pokedex-core` and implemented by other crates.

pub mod http;

pub use http::HttpAdapter;
