//! Handlers for the `/artists` resource.
//!
//! Artists cannot be deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::error::CoreError;
use fyyur_core::types::DbId;
use fyyur_db::models::artist::{ArtistForm, ArtistListItem};
use fyyur_db::repositories::ArtistRepo;
use fyyur_db::views::{artist_detail, search_artists, ArtistSummary, SearchResults};

use super::{now, validate_form};
use crate::error::{AppError, AppResult};
use crate::query::SearchForm;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Artist", id })
}

/// GET /api/v1/artists
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ArtistListItem>>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ArtistForm>,
) -> AppResult<(StatusCode, Json<ArtistSummary>)> {
    validate_form(&input)?;

    let id = ArtistRepo::create(&state.pool, &input).await.map_err(|e| {
        AppError::store_failure(
            e,
            format!("An error occurred while creating Artist {}", input.name),
        )
    })?;
    tracing::info!(artist_id = id, name = %input.name, "Artist was successfully listed");

    let artist = artist_detail(&state.pool, id, now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok((StatusCode::CREATED, Json(artist)))
}

/// POST /api/v1/artists/search
pub async fn search(
    State(state): State<AppState>,
    Json(form): Json<SearchForm>,
) -> AppResult<Json<SearchResults<ArtistSummary>>> {
    let results = search_artists(&state.pool, &form.search_term, now()).await?;
    Ok(Json(results))
}

/// GET /api/v1/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArtistSummary>> {
    let artist = artist_detail(&state.pool, id, now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(artist))
}

/// GET /api/v1/artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArtistForm>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ArtistForm::from(&artist)))
}

/// PUT /api/v1/artists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ArtistForm>,
) -> AppResult<Json<ArtistSummary>> {
    validate_form(&input)?;

    let updated = ArtistRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| {
            AppError::store_failure(
                e,
                format!("An error occurred while updating Artist {}", input.name),
            )
        })?;
    if !updated {
        return Err(not_found(id));
    }
    tracing::info!(artist_id = id, "Artist was successfully updated");

    let artist = artist_detail(&state.pool, id, now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(artist))
}
