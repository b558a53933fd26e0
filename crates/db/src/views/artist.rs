use fyyur_core::types::{DbId, Timestamp};
use serde::Serialize;

use crate::models::artist::Artist;
use crate::repositories::{ArtistRepo, ShowRepo};
use crate::views::show::ShowSplit;
use crate::DbPool;

/// An artist with their shows split into past and upcoming.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub genres: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub shows: ShowSplit,
}

impl ArtistSummary {
    pub fn new(artist: Artist, shows: ShowSplit) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website_link,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            shows,
        }
    }
}

/// Load an artist's shows and build their summary.
pub async fn summarize_artist(
    pool: &DbPool,
    artist: Artist,
    now: Timestamp,
) -> Result<ArtistSummary, sqlx::Error> {
    let shows = ShowRepo::list_for_artist(pool, artist.id).await?;
    Ok(ArtistSummary::new(artist, ShowSplit::partition(shows, now)))
}

/// Artist detail page data, or `None` if the artist does not exist.
pub async fn artist_detail(
    pool: &DbPool,
    id: DbId,
    now: Timestamp,
) -> Result<Option<ArtistSummary>, sqlx::Error> {
    match ArtistRepo::find_by_id(pool, id).await? {
        Some(artist) => summarize_artist(pool, artist, now).await.map(Some),
        None => Ok(None),
    }
}
