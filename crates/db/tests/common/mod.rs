#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use fyyur_core::types::{DbId, Timestamp};
use fyyur_db::models::artist::ArtistForm;
use fyyur_db::models::show::ShowForm;
use fyyur_db::models::venue::VenueForm;
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use sqlx::SqlitePool;

/// Fixed reference time used as "now" across tests.
pub fn reference_now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap()
}

pub fn venue_form(name: &str, city: &str, state: &str) -> VenueForm {
    VenueForm {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

pub fn artist_form(name: &str) -> ArtistForm {
    ArtistForm {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: None,
        genres: vec!["Rock n Roll".to_string()],
        image_link: Some("https://images.example.com/artist.jpg".to_string()),
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

pub async fn insert_venue(pool: &SqlitePool, name: &str, city: &str, state: &str) -> DbId {
    VenueRepo::create(pool, &venue_form(name, city, state))
        .await
        .unwrap()
}

pub async fn insert_artist(pool: &SqlitePool, name: &str) -> DbId {
    ArtistRepo::create(pool, &artist_form(name)).await.unwrap()
}

pub async fn insert_show(
    pool: &SqlitePool,
    venue_id: DbId,
    artist_id: DbId,
    start_time: Timestamp,
) -> DbId {
    ShowRepo::create(
        pool,
        &ShowForm {
            venue_id,
            artist_id,
            start_time,
        },
    )
    .await
    .unwrap()
}
