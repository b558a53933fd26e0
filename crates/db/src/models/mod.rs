//! Row structs and form DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` form DTO used for both inserts and
//!   full-overwrite updates

pub mod artist;
pub mod show;
pub mod venue;

use validator::ValidationError;

/// Reject genres that would be split apart by the stored delimiter.
#[allow(clippy::ptr_arg)]
pub(crate) fn genres_without_separator(genres: &Vec<String>) -> Result<(), ValidationError> {
    if genres
        .iter()
        .any(|g| g.contains(fyyur_core::genres::GENRE_SEPARATOR))
    {
        let mut err = ValidationError::new("genre_separator");
        err.message = Some("Genres must not contain commas".into());
        return Err(err);
    }
    Ok(())
}
