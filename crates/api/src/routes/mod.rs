pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /venues                     list by area, create
/// /venues/search              search by name (POST)
/// /venues/{id}                get, update, delete
/// /venues/{id}/edit           edit-form prefill
///
/// /artists                    list, create
/// /artists/search             search by name (POST)
/// /artists/{id}               get, update
/// /artists/{id}/edit          edit-form prefill
///
/// /shows                      list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
