use serde::Serialize;
use thiserror::Error;

/// A WGS-84 coordinate in degrees. Only constructed through [`GeoPoint::new`], so it is always in range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::Latitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::Longitude(longitude));
        }

        Ok(GeoPoint { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The center of the bounding box spanned by both points.
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint {
            latitude: (self.latitude.min(other.latitude) + self.latitude.max(other.latitude)) / 2.0,
            longitude: (self.longitude.min(other.longitude) + self.longitude.max(other.longitude)) / 2.0,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoPointError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    Latitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    Longitude(f64),
}
