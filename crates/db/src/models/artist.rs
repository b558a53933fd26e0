//! Artist entity model and form DTO.

use fyyur_core::genres::split_genres;
use fyyur_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::genres_without_separator;

/// A row from the `artist` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    /// Comma-joined genre list.
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Minimal artist info for the artist index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistListItem {
    pub id: DbId,
    pub name: String,
}

/// Artist form submission, for inserts and full-overwrite updates.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ArtistForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1, max = 120))]
    pub city: String,
    #[validate(length(min = 1, max = 120))]
    pub state: String,
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
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: split_genres(&artist.genres),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}
