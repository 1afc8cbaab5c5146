//! Name normalization shared by every write path and the name lookup.

/// Canonical form of a Pokémon name: surrounding whitespace removed,
/// lowercased.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}
