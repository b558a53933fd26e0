//! Venue entity model and form DTO.

use fyyur_core::genres::split_genres;
use fyyur_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::genres_without_separator;

/// A row from the `venue` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    /// Comma-joined genre list.
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Venue form submission. Used for inserts and for updates, which overwrite
/// every column.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct VenueForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1, max = 120))]
    pub city: String,
    #[validate(length(min = 1, max = 120))]
    pub state: String,
    #[validate(length(min = 1, max = 120))]
    pub address: String,
    #[validate(length(max = 120))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "genres_without_separator"))]
    pub genres: Vec<String>,
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    #[validate(url, length(max = 120))]
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<&Venue> for VenueForm {
    /// Prefill an edit form from the stored row.
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: split_genres(&venue.genres),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}
