//! Show entity model and form DTO.

use fyyur_core::datetime::parse_datetime;
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row from the `show` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

/// A show joined with the names and images of its venue and artist.
///
/// This is the flat record embedded in venue and artist views and returned
/// by the show index.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ShowSummary {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image: Option<String>,
    pub start_time: Timestamp,
    pub venue_image: Option<String>,
}

/// Show form submission.
///
/// `start_time` accepts RFC 3339 or `YYYY-MM-DD HH:MM:SS` (UTC).
#[derive(Debug, Clone, Deserialize)]
pub struct ShowForm {
    pub venue_id: DbId,
    pub artist_id: DbId,
    #[serde(deserialize_with = "deserialize_start_time")]
    pub start_time: Timestamp,
}

fn deserialize_start_time<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(serde::de::Error::custom)
}
