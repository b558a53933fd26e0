//! Repository for the `show` table.
//!
//! Shows cannot be updated or deleted directly; deleting a venue removes its
//! shows by cascade.

use fyyur_core::types::DbId;

use crate::models::show::{Show, ShowForm, ShowSummary};
use crate::store::WriteResult;
use crate::DbPool;

/// Select list joining a show to its venue and artist.
const SUMMARY_SELECT: &str = "\
    SELECT s.venue_id, v.name AS venue_name, s.artist_id, a.name AS artist_name, \
           a.image_link AS artist_image, s.start_time, v.image_link AS venue_image \
    FROM show s \
    JOIN venue v ON v.id = s.venue_id \
    JOIN artist a ON a.id = s.artist_id";

/// Provides insert and joined read operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning its store-assigned ID.
    ///
    /// Fails with a foreign key violation if the venue or artist does not exist.
    pub async fn create(pool: &DbPool, input: &ShowForm) -> WriteResult<DbId> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO show (venue_id, artist_id, start_time) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(input.venue_id)
        .bind(input.artist_id)
        .bind(input.start_time)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a show row by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        sqlx::query_as::<_, Show>(
            "SELECT id, venue_id, artist_id, start_time FROM show WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find the joined summary of a single show.
    pub async fn find_summary(pool: &DbPool, id: DbId) -> Result<Option<ShowSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE s.id = ?");
        sqlx::query_as::<_, ShowSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every show, ordered by start time.
    pub async fn list_summaries(pool: &DbPool) -> Result<Vec<ShowSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// All shows booked at a venue, ordered by start time.
    pub async fn list_for_venue(
        pool: &DbPool,
        venue_id: DbId,
    ) -> Result<Vec<ShowSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE s.venue_id = ? ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowSummary>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }

    /// All shows an artist plays, ordered by start time.
    pub async fn list_for_artist(
        pool: &DbPool,
        artist_id: DbId,
    ) -> Result<Vec<ShowSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE s.artist_id = ? ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowSummary>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }
}
