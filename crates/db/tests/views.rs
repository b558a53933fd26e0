//! Integration tests for the aggregated views: show splits, geography
//! grouping, and name search.

mod common;

use chrono::Duration;
use common::{insert_artist, insert_show, insert_venue, reference_now};
use fyyur_core::search::name_pattern;
use fyyur_db::repositories::{ArtistRepo, VenueRepo};
use fyyur_db::views::{artist_detail, search_artists, search_venues, venue_detail, venues_by_area};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Past / upcoming split
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_venue_detail_splits_shows(pool: SqlitePool) {
    let venue_id = insert_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = insert_artist(&pool, "Guns N Petals").await;
    let now = reference_now();

    for days in [-30, -2, -1] {
        insert_show(&pool, venue_id, artist_id, now + Duration::days(days)).await;
    }
    for days in [1, 45] {
        insert_show(&pool, venue_id, artist_id, now + Duration::days(days)).await;
    }

    let detail = venue_detail(&pool, venue_id, now).await.unwrap().unwrap();
    assert_eq!(detail.shows.past_shows_count, 3);
    assert_eq!(detail.shows.upcoming_shows_count, 2);
    assert_eq!(detail.shows.past_shows.len(), 3);
    assert_eq!(detail.shows.upcoming_shows.len(), 2);
    assert!(detail
        .shows
        .past_shows
        .iter()
        .all(|s| s.start_time < now && s.artist_name == "Guns N Petals"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_show_starting_now_is_upcoming(pool: SqlitePool) {
    let venue_id = insert_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = insert_artist(&pool, "Guns N Petals").await;
    let now = reference_now();
    insert_show(&pool, venue_id, artist_id, now).await;

    let detail = venue_detail(&pool, venue_id, now).await.unwrap().unwrap();
    assert_eq!(detail.shows.past_shows_count, 0);
    assert_eq!(detail.shows.upcoming_shows_count, 1);
    assert_eq!(detail.shows.upcoming_shows[0].start_time, now);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artist_detail_resolves_venues(pool: SqlitePool) {
    let hop = insert_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let park = insert_venue(&pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    let artist_id = insert_artist(&pool, "The Wild Sax Band").await;
    let other_artist = insert_artist(&pool, "Matt Quevado").await;
    let now = reference_now();

    insert_show(&pool, hop, artist_id, now - Duration::days(5)).await;
    insert_show(&pool, park, artist_id, now + Duration::days(5)).await;
    insert_show(&pool, park, other_artist, now + Duration::days(6)).await;

    let detail = artist_detail(&pool, artist_id, now).await.unwrap().unwrap();
    assert_eq!(detail.shows.past_shows_count, 1);
    assert_eq!(detail.shows.upcoming_shows_count, 1);
    assert_eq!(detail.shows.past_shows[0].venue_name, "The Musical Hop");
    assert_eq!(
        detail.shows.upcoming_shows[0].venue_name,
        "Park Square Live Music & Coffee"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_of_missing_entity_is_none(pool: SqlitePool) {
    let now = reference_now();
    assert!(venue_detail(&pool, 12_345, now).await.unwrap().is_none());
    assert!(artist_detail(&pool, 12_345, now).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_venue_without_shows_has_zero_counts(pool: SqlitePool) {
    let venue_id = insert_venue(&pool, "Empty Room", "Austin", "TX").await;

    let detail = venue_detail(&pool, venue_id, reference_now())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.shows.past_shows_count, 0);
    assert_eq!(detail.shows.upcoming_shows_count, 0);
    assert!(detail.shows.past_shows.is_empty());
}

// ---------------------------------------------------------------------------
// Grouping by geography
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_venues_grouped_by_state_and_city(pool: SqlitePool) {
    let bk1 = insert_venue(&pool, "Brooklyn Bowl", "Brooklyn", "NY").await;
    let bk2 = insert_venue(&pool, "Music Hall of Williamsburg", "Brooklyn", "NY").await;
    let qn = insert_venue(&pool, "Knockdown Center", "Queens", "NY").await;
    insert_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;

    let areas = venues_by_area(&pool, reference_now()).await.unwrap();

    let ny: Vec<_> = areas.iter().filter(|a| a.state == "NY").collect();
    assert_eq!(ny.len(), 2);

    let brooklyn = ny.iter().find(|a| a.city == "Brooklyn").unwrap();
    let ids: Vec<_> = brooklyn.venues.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![bk1, bk2]);

    let queens = ny.iter().find(|a| a.city == "Queens").unwrap();
    let ids: Vec<_> = queens.venues.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![qn]);

    assert_eq!(areas.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_grouping_is_case_sensitive(pool: SqlitePool) {
    insert_venue(&pool, "Upper", "Brooklyn", "NY").await;
    insert_venue(&pool, "Lower", "brooklyn", "NY").await;

    let areas = venues_by_area(&pool, reference_now()).await.unwrap();
    assert_eq!(areas.len(), 2);
    assert!(areas.iter().all(|a| a.venues.len() == 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_grouping_with_no_venues_is_empty(pool: SqlitePool) {
    let areas = venues_by_area(&pool, reference_now()).await.unwrap();
    assert!(areas.is_empty());
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

async fn seed_search_data(pool: &SqlitePool) {
    insert_venue(pool, "The Musical Hop", "San Francisco", "CA").await;
    insert_venue(pool, "The Dueling Pianos Bar", "New York", "NY").await;
    insert_venue(pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    insert_artist(pool, "Guns N Petals").await;
    insert_artist(pool, "Matt Quevado").await;
    insert_artist(pool, "The Wild Sax Band").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_venues_substring(pool: SqlitePool) {
    seed_search_data(&pool).await;
    let now = reference_now();

    let hop = search_venues(&pool, "Hop", now).await.unwrap();
    assert_eq!(hop.count, 1);
    assert_eq!(hop.data[0].name, "The Musical Hop");

    let music = search_venues(&pool, "Music", now).await.unwrap();
    let names: Vec<_> = music.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["The Musical Hop", "Park Square Live Music & Coffee"]
    );
    assert_eq!(music.count, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive(pool: SqlitePool) {
    seed_search_data(&pool).await;

    let results = search_venues(&pool, "mUsIc", reference_now()).await.unwrap();
    assert_eq!(results.count, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_search_returns_nothing(pool: SqlitePool) {
    seed_search_data(&pool).await;
    let now = reference_now();

    let venues = search_venues(&pool, "", now).await.unwrap();
    assert_eq!(venues.count, 0);
    assert!(venues.data.is_empty());

    let artists = search_artists(&pool, "", now).await.unwrap();
    assert_eq!(artists.count, 0);
    assert!(artists.data.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_name_only(pool: SqlitePool) {
    seed_search_data(&pool).await;

    // Every seeded venue has this address and two share this city.
    let by_address = search_venues(&pool, "Folsom", reference_now()).await.unwrap();
    assert_eq!(by_address.count, 0);
    let by_city = search_venues(&pool, "Francisco", reference_now()).await.unwrap();
    assert_eq!(by_city.count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_wildcards_are_not_escaped(pool: SqlitePool) {
    seed_search_data(&pool).await;

    let everything = search_venues(&pool, "%", reference_now()).await.unwrap();
    assert_eq!(everything.count, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_artists(pool: SqlitePool) {
    seed_search_data(&pool).await;
    let now = reference_now();

    let a = search_artists(&pool, "A", now).await.unwrap();
    let names: Vec<_> = a.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Guns N Petals", "Matt Quevado", "The Wild Sax Band"]);

    let band = search_artists(&pool, "band", now).await.unwrap();
    assert_eq!(band.count, 1);
    assert_eq!(band.data[0].name, "The Wild Sax Band");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_count_matches_store_count(pool: SqlitePool) {
    seed_search_data(&pool).await;
    let now = reference_now();

    for term in ["Hop", "Music", "the", "zzz"] {
        let pattern = name_pattern(term).unwrap();

        let venues = search_venues(&pool, term, now).await.unwrap();
        let stored = VenueRepo::count_by_name(&pool, &pattern).await.unwrap();
        assert_eq!(venues.count as i64, stored, "venue term {term}");

        let artists = search_artists(&pool, term, now).await.unwrap();
        let stored = ArtistRepo::count_by_name(&pool, &pattern).await.unwrap();
        assert_eq!(artists.count as i64, stored, "artist term {term}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_folds_accented_capitals(pool: SqlitePool) {
    insert_venue(&pool, "Café Éclair", "Montréal", "QC").await;
    insert_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    insert_artist(&pool, "Ólafur Arnalds").await;
    let now = reference_now();

    for term in ["éclair", "ÉCLAIR", "Éclair", "café"] {
        let results = search_venues(&pool, term, now).await.unwrap();
        assert_eq!(results.count, 1, "venue term {term}");
        assert_eq!(results.data[0].name, "Café Éclair");

        let pattern = name_pattern(term).unwrap();
        assert_eq!(VenueRepo::count_by_name(&pool, &pattern).await.unwrap(), 1);
    }

    let artists = search_artists(&pool, "ólafur", now).await.unwrap();
    assert_eq!(artists.count, 1);
    assert_eq!(artists.data[0].name, "Ólafur Arnalds");
}
