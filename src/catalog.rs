use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::models::{ContentRow, Movie};

/// The static, read-only dataset: the base movie array plus the named
/// content rows. Loaded once per process; never mutated. Row entries that
/// duplicate a base movie are slim references (id + title) and get swapped
/// for the full catalog record at render time (see rows.rs).
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub rows: Vec<ContentRow>,
}

const SEED_JSON: &str = include_str!("../assets/catalog.json");

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| serde_json::from_str(SEED_JSON).expect("bundled catalog JSON"));

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    /// The hero-banner movie. Falls back to the first catalog entry if the
    /// dataset forgot to flag one.
    pub fn featured(&self) -> Option<&Movie> {
        self.movies
            .iter()
            .find(|m| m.is_featured)
            .or_else(|| self.movies.first())
    }

    /// Resolve an id to a movie, base catalog first, then every content
    /// row in order. All occurrences of one id share identity, so the
    /// first hit is the canonical record.
    pub fn find_movie(&self, id: &str) -> Option<&Movie> {
        self.movies
            .iter()
            .find(|m| m.id == id)
            .or_else(|| {
                self.rows
                    .iter()
                    .flat_map(|r| r.movies.iter())
                    .find(|m| m.id == id)
            })
    }

    /// Seed like count for an id, if the dataset carries one.
    pub fn seed_likes(&self, id: &str) -> Option<u32> {
        self.find_movie(id).and_then(|m| m.likes)
    }
}
