//! Repository for the `venue` table.

use fyyur_core::genres::join_genres;
use fyyur_core::search::like_matches;
use fyyur_core::types::DbId;

use crate::models::venue::{Venue, VenueForm};
use crate::store::WriteResult;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, city, state, address, phone, genres, image_link, \
    facebook_link, website_link, seeking_talent, seeking_description";

/// Provides CRUD and lookup operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning its store-assigned ID.
    pub async fn create(pool: &DbPool, input: &VenueForm) -> WriteResult<DbId> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO venue (name, city, state, address, phone, genres, image_link, \
                                facebook_link, website_link, seeking_talent, seeking_description) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(join_genres(&input.genres))
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venue WHERE id = ?");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all venues in ID order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venue ORDER BY id");
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// Overwrite every column of a venue.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(pool: &DbPool, id: DbId, input: &VenueForm) -> WriteResult<bool> {
        let result = sqlx::query(
            "UPDATE venue SET \
                name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?, \
                image_link = ?, facebook_link = ?, website_link = ?, \
                seeking_talent = ?, seeking_description = ? \
             WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(join_genres(&input.genres))
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a venue by ID. Its shows are removed by cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> WriteResult<bool> {
        let result = sqlx::query("DELETE FROM venue WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Geography
    // -----------------------------------------------------------------------

    /// Distinct states that have at least one venue.
    pub async fn distinct_states(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT state FROM venue ORDER BY state")
            .fetch_all(pool)
            .await
    }

    /// Distinct cities among venues in `state` (exact, case-sensitive match).
    pub async fn distinct_cities(pool: &DbPool, state: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT city FROM venue WHERE state = ? ORDER BY city",
        )
        .bind(state)
        .fetch_all(pool)
        .await
    }

    /// All venues located in exactly `city`, `state`.
    pub async fn list_in_area(
        pool: &DbPool,
        state: &str,
        city: &str,
    ) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venue WHERE state = ? AND city = ? ORDER BY id");
        sqlx::query_as::<_, Venue>(&query)
            .bind(state)
            .bind(city)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Venues whose name matches the `LIKE`-style `pattern`, ignoring case.
    ///
    /// The pattern is evaluated with [`like_matches`] rather than SQLite's
    /// `LIKE`, which only folds ASCII letters.
    pub async fn search_by_name(pool: &DbPool, pattern: &str) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venue ORDER BY id");
        let rows = sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await?;
        Ok(rows
            .into_iter()
            .filter(|row| like_matches(pattern, &row.name))
            .collect())
    }

    /// Number of venues matching the same filter as [`Self::search_by_name`].
    pub async fn count_by_name(pool: &DbPool, pattern: &str) -> Result<i64, sqlx::Error> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM venue")
            .fetch_all(pool)
            .await?;
        let count = names.iter().filter(|name| like_matches(pattern, name)).count();
        Ok(count as i64)
    }
}
