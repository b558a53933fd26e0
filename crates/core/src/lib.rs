//! Domain helpers shared by the store and HTTP layers.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the API server, and tests alike.

pub mod datetime;
pub mod error;
pub mod genres;
pub mod schedule;
pub mod search;
pub mod types;
