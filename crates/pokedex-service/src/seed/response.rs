//! Shape of the upstream listing response.

use serde::Deserialize;

/// One page of the upstream listing. Only `results` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct PokeApiPage {
    /// Total number of entries upstream.
    #[serde(default)]
    pub count: Option<u32>,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Entries on this page.
    pub results: Vec<PokeApiEntry>,
}

/// A listing entry: a name and the URL of its detail resource.
#[derive(Debug, Clone, Deserialize)]
pub struct PokeApiEntry {
    pub name: String,
    /// e.g. `https://pokeapi.co/api/v2/pokemon/25/`
    pub url: String,
}

impl PokeApiEntry {
    /// National-dex number taken from the second-to-last `/` segment of
    /// the URL. `None` if that segment is missing or not an integer.
    pub fn number(&self) -> Option<i32> {
        let segments: Vec<&str> = self.url.split('/').collect();
        let index = segments.len().checked_sub(2)?;
        segments[index].parse().ok()
    }
}
