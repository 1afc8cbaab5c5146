//! Reseed the catalog from the upstream listing.

use std::sync::Arc;

use tracing::{info, warn};

use pokedex_core::config::SeedConfig;
use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;
use pokedex_core::traits::HttpAdapter;
use pokedex_entity::pokemon::CreatePokemon;

use crate::pokemon::PokemonService;

use super::response::PokeApiPage;

/// Reply returned by a successful seed.
pub const SEED_EXECUTED: &str = "seed executed";

/// Wipes the catalog and refills it from a single upstream fetch.
#[derive(Debug, Clone)]
pub struct SeedService {
    /// Catalog to refill.
    pokemon: PokemonService,
    /// Upstream client.
    http: Arc<dyn HttpAdapter>,
    /// Upstream location and page size.
    config: SeedConfig,
}

impl SeedService {
    /// Creates a new seed service.
    pub fn new(pokemon: PokemonService, http: Arc<dyn HttpAdapter>, config: SeedConfig) -> Self {
        Self {
            pokemon,
            http,
            config,
        }
    }

    /// Delete every record, fetch the upstream listing, and bulk insert it.
    ///
    /// The wipe is not undone if the fetch or insert fails afterwards; the
    /// catalog is then left empty.
    pub async fn execute_seed(&self) -> AppResult<&'static str> {
        self.pokemon.remove_many().await?;

        let url = self.config.listing_url();
        info!(%url, "Fetching seed listing");

        let page: PokeApiPage = self.http.get(&url).await.inspect_err(|e| {
            warn!(%url, error = %e, "Seed fetch failed; catalog left empty");
        })?;

        let records = page
            .results
            .iter()
            .map(|entry| {
                entry
                    .number()
                    .map(|number| CreatePokemon::new(entry.name.clone(), number))
                    .ok_or_else(|| {
                        AppError::external_service(format!(
                            "Cannot derive pokemon number from url: '{}'",
                            entry.url
                        ))
                    })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let created = self.pokemon.create_many(records).await?;
        info!(count = created.len(), upstream_total = ?page.count, "Seed completed");

        Ok(SEED_EXECUTED)
    }
}
