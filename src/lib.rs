//! School Locator - stores schools and lists them by distance from a point
//!
//! Schools are persisted through a [`services::SchoolStore`] and ranked with
//! the Haversine great-circle distance on a spherical Earth.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_distance, rank_by_distance};
pub use models::{GeoPoint, NewSchool, RankedSchool, School};
pub use services::{InMemoryStore, PostgresClient, SchoolStore, StoreError};
