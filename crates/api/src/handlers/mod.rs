//! Request handlers for venues, artists, and shows.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the repositories and views in `fyyur_db` and map
//! errors via [`AppError`].

pub mod artist;
pub mod show;
pub mod venue;

use chrono::Utc;
use fyyur_core::types::Timestamp;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run `validator` rules on a submitted form.
pub(crate) fn validate_form<T: Validate>(input: &T) -> AppResult<()> {
    input.validate().map_err(AppError::from)
}

/// Reference time for splitting shows into past and upcoming.
pub(crate) fn now() -> Timestamp {
    Utc::now()
}
