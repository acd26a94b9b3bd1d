use crate::domain::GeoPoint;
use serde::{Deserialize, Serialize};

/// A position picked by the user or reported by the device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    pub coords: GeoPoint,
    pub address: Option<String>,
}

impl LocationSample {
    pub fn new(coords: GeoPoint) -> Self {
        LocationSample { coords, address: None }
    }

    pub fn with_address(coords: GeoPoint, address: impl Into<String>) -> Self {
        LocationSample {
            coords,
            address: Some(address.into()),
        }
    }

    /// The address to show or submit, falling back to the raw coordinates.
    pub fn label(&self) -> String {
        match &self.address {
            Some(address) => address.clone(),
            None => format!("{:.5}, {:.5}", self.coords.latitude(), self.coords.longitude()),
        }
    }
}
