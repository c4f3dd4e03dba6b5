use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{GeoPoint, NewSchool};

/// Reasons a request is rejected before touching storage
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("Latitude and longitude are required.")]
    MissingCoordinates,

    #[error("Latitude and longitude must be numbers.")]
    NotNumeric,

    #[error("Latitude must be between -90 and 90.")]
    LatitudeOutOfRange(f64),

    #[error("Longitude must be between -180 and 180.")]
    LongitudeOutOfRange(f64),
}

/// A coordinate as sent by clients: either a JSON number or a string holding one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    Number(f64),
    Text(String),
}

impl CoordinateInput {
    /// Parse into a finite number
    pub fn parse(&self) -> Result<f64, ValidationError> {
        let value = match self {
            CoordinateInput::Number(n) => *n,
            CoordinateInput::Text(s) => parse_coordinate(s)?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ValidationError::NotNumeric)
        }
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotNumeric)
}

/// Build a point from parsed coordinates, enforcing the valid degree ranges
fn checked_point(latitude: f64, longitude: f64) -> Result<GeoPoint, ValidationError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(ValidationError::NotNumeric);
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange(longitude));
    }
    Ok(GeoPoint::new(latitude, longitude))
}

/// Request body for `POST /addSchool`
///
/// ```json
/// {
///   "name": "A High",
///   "address": "1 Main St",
///   "latitude": 40.0,
///   "longitude": "-73.0"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AddSchoolRequest {
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub address: Option<String>,
    #[validate(required)]
    #[serde(default)]
    pub latitude: Option<CoordinateInput>,
    #[validate(required)]
    #[serde(default)]
    pub longitude: Option<CoordinateInput>,
}

impl AddSchoolRequest {
    /// Validate the request and turn it into a storable school
    pub fn into_new_school(self) -> Result<NewSchool, ValidationError> {
        if self.validate().is_err() {
            return Err(ValidationError::MissingFields);
        }

        let (Some(name), Some(address), Some(latitude), Some(longitude)) =
            (self.name, self.address, self.latitude, self.longitude)
        else {
            return Err(ValidationError::MissingFields);
        };

        let point = checked_point(latitude.parse()?, longitude.parse()?)?;

        Ok(NewSchool {
            name,
            address,
            latitude: point.latitude,
            longitude: point.longitude,
        })
    }
}

/// Query parameters for `GET /listSchools`
///
/// Kept as raw strings so that bad values produce our own error messages
/// rather than a generic query deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSchoolsQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl ListSchoolsQuery {
    /// The point to measure distances from
    pub fn origin(&self) -> Result<GeoPoint, ValidationError> {
        let (latitude, longitude) = match (self.latitude.as_deref(), self.longitude.as_deref()) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
            _ => return Err(ValidationError::MissingCoordinates),
        };

        checked_point(parse_coordinate(latitude)?, parse_coordinate(longitude)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> AddSchoolRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_numeric_request() {
        let school = request(json!({
            "name": "A High",
            "address": "1 Main St",
            "latitude": 40.0,
            "longitude": -73.0
        }))
        .into_new_school()
        .unwrap();

        assert_eq!(school.name, "A High");
        assert_eq!(school.latitude, 40.0);
        assert_eq!(school.longitude, -73.0);
    }

    #[test]
    fn test_text_coordinates_are_coerced() {
        let school = request(json!({
            "name": "A High",
            "address": "1 Main St",
            "latitude": " 12.5 ",
            "longitude": "77"
        }))
        .into_new_school()
        .unwrap();

        assert_eq!(school.latitude, 12.5);
        assert_eq!(school.longitude, 77.0);
    }

    #[test]
    fn test_integer_coordinates_accepted() {
        let school = request(json!({
            "name": "A High",
            "address": "1 Main St",
            "latitude": 40,
            "longitude": -73
        }))
        .into_new_school()
        .unwrap();

        assert_eq!(school.latitude, 40.0);
    }

    #[test]
    fn test_missing_and_empty_fields() {
        let missing_name = request(json!({
            "address": "1 Main St",
            "latitude": 40.0,
            "longitude": -73.0
        }));
        assert_eq!(missing_name.into_new_school(), Err(ValidationError::MissingFields));

        let empty_address = request(json!({
            "name": "A High",
            "address": "",
            "latitude": 40.0,
            "longitude": -73.0
        }));
        assert_eq!(empty_address.into_new_school(), Err(ValidationError::MissingFields));

        let null_longitude = request(json!({
            "name": "A High",
            "address": "1 Main St",
            "latitude": 40.0,
            "longitude": null
        }));
        assert_eq!(null_longitude.into_new_school(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_non_numeric_coordinates() {
        for bad in ["abc", "", "NaN", "inf", "12abc"] {
            let req = request(json!({
                "name": "A High",
                "address": "1 Main St",
                "latitude": bad,
                "longitude": -73.0
            }));
            assert_eq!(req.into_new_school(), Err(ValidationError::NotNumeric), "input {:?}", bad);
        }
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let req = request(json!({
            "name": "A High",
            "address": "1 Main St",
            "latitude": 91.0,
            "longitude": 0.0
        }));
        assert_eq!(req.into_new_school(), Err(ValidationError::LatitudeOutOfRange(91.0)));

        let req = request(json!({
            "name": "A High",
            "address": "1 Main St",
            "latitude": 0.0,
            "longitude": "-180.5"
        }));
        assert_eq!(req.into_new_school(), Err(ValidationError::LongitudeOutOfRange(-180.5)));
    }

    #[test]
    fn test_query_origin() {
        let query = ListSchoolsQuery {
            latitude: Some("40.7128".to_string()),
            longitude: Some("-74.0060".to_string()),
        };
        assert_eq!(query.origin().unwrap(), GeoPoint::new(40.7128, -74.0060));
    }

    #[test]
    fn test_query_missing_or_bad() {
        let missing = ListSchoolsQuery {
            latitude: None,
            longitude: Some("1".to_string()),
        };
        assert_eq!(missing.origin(), Err(ValidationError::MissingCoordinates));

        let empty = ListSchoolsQuery {
            latitude: Some(String::new()),
            longitude: Some("1".to_string()),
        };
        assert_eq!(empty.origin(), Err(ValidationError::MissingCoordinates));

        let text = ListSchoolsQuery {
            latitude: Some("north".to_string()),
            longitude: Some("1".to_string()),
        };
        assert_eq!(text.origin(), Err(ValidationError::NotNumeric));
    }
}
