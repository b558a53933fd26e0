//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument. Reads return `sqlx::Error`;
//! writes return [`StoreFailure`](crate::store::StoreFailure).

pub mod artist_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;
