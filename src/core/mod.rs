// Core algorithm exports
pub mod distance;
pub mod ranking;

pub use distance::{haversine_distance, EARTH_RADIUS_KM};
pub use ranking::rank_by_distance;
