//! Repository for the `artist` table.
//!
//! Artists have no delete operation.

use fyyur_core::genres::join_genres;
use fyyur_core::search::like_matches;
use fyyur_core::types::DbId;

use crate::models::artist::{Artist, ArtistForm, ArtistListItem};
use crate::store::WriteResult;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, city, state, phone, genres, image_link, \
    facebook_link, website_link, seeking_venue, seeking_description";

/// Provides create, read, and update operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning its store-assigned ID.
    pub async fn create(pool: &DbPool, input: &ArtistForm) -> WriteResult<DbId> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO artist (name, city, state, phone, genres, image_link, \
                                 facebook_link, website_link, seeking_venue, seeking_description) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(join_genres(&input.genres))
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artist WHERE id = ?");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every artist's ID and name in ID order.
    pub async fn list(pool: &DbPool) -> Result<Vec<ArtistListItem>, sqlx::Error> {
        sqlx::query_as::<_, ArtistListItem>("SELECT id, name FROM artist ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Overwrite every column of an artist.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(pool: &DbPool, id: DbId, input: &ArtistForm) -> WriteResult<bool> {
        let result = sqlx::query(
            "UPDATE artist SET \
                name = ?, city = ?, state = ?, phone = ?, genres = ?, \
                image_link = ?, facebook_link = ?, website_link = ?, \
                seeking_venue = ?, seeking_description = ? \
             WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(join_genres(&input.genres))
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Artists whose name matches the `LIKE`-style `pattern`, ignoring case.
    ///
    /// The pattern is evaluated with [`like_matches`] rather than SQLite's
    /// `LIKE`, which only folds ASCII letters.
    pub async fn search_by_name(pool: &DbPool, pattern: &str) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artist ORDER BY id");
        let rows = sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await?;
        Ok(rows
            .into_iter()
            .filter(|row| like_matches(pattern, &row.name))
            .collect())
    }

    /// Number of artists matching the same filter as [`Self::search_by_name`].
    pub async fn count_by_name(pool: &DbPool, pattern: &str) -> Result<i64, sqlx::Error> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM artist")
            .fetch_all(pool)
            .await?;
        let count = names.iter().filter(|name| like_matches(pattern, name)).count();
        Ok(count as i64)
    }
}
