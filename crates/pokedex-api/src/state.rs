//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use pokedex_core::config::AppConfig;
use pokedex_service::{PokemonService, SeedService};

/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Catalog service
    pub pokemon_service: Arc<PokemonService>,
    /// Seed importer
    pub seed_service: Arc<SeedService>,
}

impl AppState {
    /// Bundle the configuration and services.
    pub fn new(config: AppConfig, pokemon_service: PokemonService, seed_service: SeedService) -> Self {
        Self {
            config: Arc::new(config),
            pokemon_service: Arc::new(pokemon_service),
            seed_service: Arc::new(seed_service),
        }
    }
}
