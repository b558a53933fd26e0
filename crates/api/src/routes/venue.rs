//! Route definitions for venues, mounted at `/venues`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// ```text
/// GET    /              -> list_by_area
/// POST   /              -> create
/// POST   /search        -> search
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/edit     -> edit_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue::list_by_area).post(venue::create))
        .route("/search", post(venue::search))
        .route(
            "/{id}",
            get(venue::get_by_id)
                .put(venue::update)
                .delete(venue::delete),
        )
        .route("/{id}/edit", get(venue::edit_form))
}
