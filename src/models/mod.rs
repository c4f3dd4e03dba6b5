// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{GeoPoint, NewSchool, RankedSchool, School};
pub use requests::{AddSchoolRequest, CoordinateInput, ListSchoolsQuery, ValidationError};
pub use responses::{AddSchoolResponse, ErrorResponse, HealthResponse, MessageResponse};
