//! Route definitions for artists, mounted at `/artists`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// POST   /search        -> search
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// GET    /{id}/edit     -> edit_form
/// ```
///
/// No DELETE route: the method router answers 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artist::list).post(artist::create))
        .route("/search", post(artist::search))
        .route("/{id}", get(artist::get_by_id).put(artist::update))
        .route("/{id}/edit", get(artist::edit_form))
}
