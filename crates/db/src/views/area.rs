use fyyur_core::types::Timestamp;
use serde::Serialize;

use crate::repositories::VenueRepo;
use crate::views::venue::{summarize_venues, VenueSummary};
use crate::DbPool;

/// Venues sharing one exact (city, state) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group every venue by state, then city.
///
/// City and state are compared exactly: "Brooklyn" and "brooklyn" form
/// separate groups. Groups come out ordered by state then city.
pub async fn venues_by_area(pool: &DbPool, now: Timestamp) -> Result<Vec<AreaGroup>, sqlx::Error> {
    let mut areas = Vec::new();

    for state in VenueRepo::distinct_states(pool).await? {
        for city in VenueRepo::distinct_cities(pool, &state).await? {
            let venues = VenueRepo::list_in_area(pool, &state, &city).await?;
            let venues = summarize_venues(pool, venues, now).await?;
            areas.push(AreaGroup {
                city,
                state: state.clone(),
                venues,
            });
        }
    }

    tracing::debug!(area_count = areas.len(), "Grouped venues by area");
    Ok(areas)
}
