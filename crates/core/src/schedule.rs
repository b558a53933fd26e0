//! Past / upcoming classification for shows.

use crate::types::Timestamp;

/// A show is in the past only if it started strictly before `now`.
///
/// A show starting exactly at `now` is upcoming.
pub fn is_past(start_time: Timestamp, now: Timestamp) -> bool {
    start_time < now
}

/// Partition `items` into `(past, upcoming)` relative to `now`, preserving
/// the input order within each half.
pub fn split_by_start<T, F>(items: Vec<T>, now: Timestamp, start_time: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> Timestamp,
{
    items
        .into_iter()
        .partition(|item| is_past(start_time(item), now))
}
