use fyyur_core::schedule::split_by_start;
use fyyur_core::types::Timestamp;
use serde::Serialize;

use crate::models::show::ShowSummary;

/// A venue's or artist's shows split around a reference time.
///
/// Counts are always the lengths of the two lists: both halves come from one
/// materialized query result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShowSplit {
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ShowSplit {
    /// Split `shows` into past (`start_time < now`) and upcoming
    /// (`start_time >= now`).
    pub fn partition(shows: Vec<ShowSummary>, now: Timestamp) -> Self {
        let (past_shows, upcoming_shows) = split_by_start(shows, now, |s| s.start_time);
        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
