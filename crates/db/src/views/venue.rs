use fyyur_core::types::{DbId, Timestamp};
use serde::Serialize;

use crate::models::venue::Venue;
use crate::repositories::{ShowRepo, VenueRepo};
use crate::views::show::ShowSplit;
use crate::DbPool;

/// A venue with its shows split into past and upcoming.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub genres: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub shows: ShowSplit,
}

impl VenueSummary {
    pub fn new(venue: Venue, shows: ShowSplit) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website_link,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            shows,
        }
    }
}

/// Load a venue's shows and build its summary.
pub async fn summarize_venue(
    pool: &DbPool,
    venue: Venue,
    now: Timestamp,
) -> Result<VenueSummary, sqlx::Error> {
    let shows = ShowRepo::list_for_venue(pool, venue.id).await?;
    Ok(VenueSummary::new(venue, ShowSplit::partition(shows, now)))
}

/// Summarize each venue in order.
pub async fn summarize_venues(
    pool: &DbPool,
    venues: Vec<Venue>,
    now: Timestamp,
) -> Result<Vec<VenueSummary>, sqlx::Error> {
    let mut summaries = Vec::with_capacity(venues.len());
    for venue in venues {
        summaries.push(summarize_venue(pool, venue, now).await?);
    }
    Ok(summaries)
}

/// Venue detail page data, or `None` if the venue does not exist.
pub async fn venue_detail(
    pool: &DbPool,
    id: DbId,
    now: Timestamp,
) -> Result<Option<VenueSummary>, sqlx::Error> {
    match VenueRepo::find_by_id(pool, id).await? {
        Some(venue) => summarize_venue(pool, venue, now).await.map(Some),
        None => Ok(None),
    }
}
