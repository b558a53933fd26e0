//! Aggregated views handed to the presentation layer.
//!
//! Each view is a typed projection built by a pure constructor from an
//! entity plus its already-loaded shows. The async loaders in the submodules
//! take the store handle explicitly, run the queries, and assemble the views.
//! "Now" is always passed in by the caller so classification is reproducible.

pub mod area;
pub mod artist;
pub mod search;
pub mod show;
pub mod venue;

pub use area::{venues_by_area, AreaGroup};
pub use artist::{artist_detail, ArtistSummary};
pub use search::{search_artists, search_venues, SearchResults};
pub use show::ShowSplit;
pub use venue::{venue_detail, VenueSummary};
