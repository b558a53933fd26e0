//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::datetime::{format_datetime, DateFormat};
use fyyur_db::models::show::{ShowForm, ShowSummary};
use fyyur_db::repositories::ShowRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ShowSummary>>>> {
    let shows = ShowRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: shows }))
}

/// POST /api/v1/shows
///
/// Unknown venue or artist ids are rejected by the store and reported as a
/// failed listing.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ShowForm>,
) -> AppResult<(StatusCode, Json<ShowSummary>)> {
    let id = ShowRepo::create(&state.pool, &input).await.map_err(|e| {
        if e.is_foreign_key_violation() {
            tracing::warn!(
                venue_id = input.venue_id,
                artist_id = input.artist_id,
                "Show references a missing venue or artist"
            );
        }
        AppError::store_failure(e, "An error occurred. Show could not be listed.")
    })?;
    tracing::info!(
        show_id = id,
        start = %format_datetime(input.start_time, DateFormat::Full),
        "Show was successfully listed"
    );

    let show = ShowRepo::find_summary(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Show {id} missing after insert")))?;
    Ok((StatusCode::CREATED, Json(show)))
}
