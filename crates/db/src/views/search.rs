use fyyur_core::search::name_pattern;
use fyyur_core::types::Timestamp;
use serde::Serialize;

use crate::repositories::{ArtistRepo, VenueRepo};
use crate::views::artist::{summarize_artist, ArtistSummary};
use crate::views::venue::{summarize_venues, VenueSummary};
use crate::DbPool;

/// Search response: matching entities and how many there are.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    /// The response for an empty search term.
    pub fn empty() -> Self {
        Self {
            count: 0,
            data: Vec::new(),
        }
    }

    pub fn from_data(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Case-insensitive substring search on venue names.
///
/// An empty term returns no results without touching the store.
pub async fn search_venues(
    pool: &DbPool,
    term: &str,
    now: Timestamp,
) -> Result<SearchResults<VenueSummary>, sqlx::Error> {
    let Some(pattern) = name_pattern(term) else {
        return Ok(SearchResults::empty());
    };
    let venues = VenueRepo::search_by_name(pool, &pattern).await?;
    let data = summarize_venues(pool, venues, now).await?;
    Ok(SearchResults::from_data(data))
}

/// Case-insensitive substring search on artist names.
///
/// An empty term returns no results without touching the store.
pub async fn search_artists(
    pool: &DbPool,
    term: &str,
    now: Timestamp,
) -> Result<SearchResults<ArtistSummary>, sqlx::Error> {
    let Some(pattern) = name_pattern(term) else {
        return Ok(SearchResults::empty());
    };
    let artists = ArtistRepo::search_by_name(pool, &pattern).await?;
    let mut data = Vec::with_capacity(artists.len());
    for artist in artists {
        data.push(summarize_artist(pool, artist, now).await?);
    }
    Ok(SearchResults::from_data(data))
}
