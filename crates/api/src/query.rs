//! Shared request body types for API handlers.

use serde::Deserialize;

/// Body of the venue and artist search endpoints.
///
/// A missing `search_term` is treated as empty and yields no results.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
