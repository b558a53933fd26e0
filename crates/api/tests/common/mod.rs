#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use fyyur_api::config::ServerConfig;
use fyyur_api::router::build_app_router;
use fyyur_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(body.to_string()), true).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header("content-type", "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A complete venue form body.
pub fn venue_body(name: &str, city: &str, state: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "city": city,
        "state": state,
        "address": "1015 Folsom Street",
        "phone": "123-123-1234",
        "genres": ["Jazz", "Reggae", "Swing", "Classical", "Folk"],
        "image_link": "https://images.example.com/venue.jpg",
        "facebook_link": "https://www.facebook.com/TheMusicalHop",
        "website_link": "https://www.themusicalhop.com",
        "seeking_talent": true,
        "seeking_description": "We are on the lookout for a local artist to play every two weeks."
    })
}

/// A complete artist form body.
pub fn artist_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "city": "San Francisco",
        "state": "CA",
        "phone": "326-123-5000",
        "genres": ["Rock n Roll"],
        "image_link": "https://images.example.com/artist.jpg",
        "facebook_link": "https://www.facebook.com/GunsNPetals",
        "website_link": null,
        "seeking_venue": false,
        "seeking_description": null
    })
}

/// Create a venue through the API and return its id.
pub async fn create_venue(pool: &SqlitePool, name: &str, city: &str, state: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/venues",
        venue_body(name, city, state),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create an artist through the API and return its id.
pub async fn create_artist(pool: &SqlitePool, name: &str) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/artists", artist_body(name)).await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a show through the API, returning the response.
pub async fn create_show(
    pool: &SqlitePool,
    venue_id: i64,
    artist_id: i64,
    start_time: &str,
) -> Response<Body> {
    post_json(
        build_test_app(pool.clone()),
        "/api/v1/shows",
        serde_json::json!({
            "venue_id": venue_id,
            "artist_id": artist_id,
            "start_time": start_time,
        }),
    )
    .await
}
