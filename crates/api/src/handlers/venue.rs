//! Handlers for the `/venues` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::error::CoreError;
use fyyur_core::types::DbId;
use fyyur_db::models::venue::VenueForm;
use fyyur_db::repositories::VenueRepo;
use fyyur_db::views::{
    search_venues, venue_detail, venues_by_area, AreaGroup, SearchResults, VenueSummary,
};

use super::{now, validate_form};
use crate::error::{AppError, AppResult};
use crate::query::SearchForm;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

/// GET /api/v1/venues
pub async fn list_by_area(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AreaGroup>>>> {
    let areas = venues_by_area(&state.pool, now()).await?;
    Ok(Json(DataResponse { data: areas }))
}

/// POST /api/v1/venues
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<VenueForm>,
) -> AppResult<(StatusCode, Json<VenueSummary>)> {
    validate_form(&input)?;

    let id = VenueRepo::create(&state.pool, &input).await.map_err(|e| {
        AppError::store_failure(
            e,
            format!("An error occurred while creating Venue {}", input.name),
        )
    })?;
    tracing::info!(venue_id = id, name = %input.name, "Venue was successfully listed");

    let venue = venue_detail(&state.pool, id, now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok((StatusCode::CREATED, Json(venue)))
}

/// POST /api/v1/venues/search
pub async fn search(
    State(state): State<AppState>,
    Json(form): Json<SearchForm>,
) -> AppResult<Json<SearchResults<VenueSummary>>> {
    let results = search_venues(&state.pool, &form.search_term, now()).await?;
    Ok(Json(results))
}

/// GET /api/v1/venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VenueSummary>> {
    let venue = venue_detail(&state.pool, id, now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(venue))
}

/// GET /api/v1/venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VenueForm>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(VenueForm::from(&venue)))
}

/// PUT /api/v1/venues/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<VenueForm>,
) -> AppResult<Json<VenueSummary>> {
    validate_form(&input)?;

    let updated = VenueRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| {
            AppError::store_failure(
                e,
                format!("An error occurred while updating Venue {}", input.name),
            )
        })?;
    if !updated {
        return Err(not_found(id));
    }
    tracing::info!(venue_id = id, "Venue was successfully updated");

    let venue = venue_detail(&state.pool, id, now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(venue))
}

/// DELETE /api/v1/venues/{id}
///
/// Shows held at the venue are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = VenueRepo::delete(&state.pool, id).await.map_err(|e| {
        AppError::store_failure(e, format!("An error occurred while deleting Venue {id}"))
    })?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(venue_id = id, "Venue was successfully deleted");
    Ok(Json(SuccessResponse { success: true }))
}
