use crate::domain::GeoPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Open,
    Full,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: u64,
    pub pickup_address: String,
    pub destination_address: String,
    #[serde(default)]
    pub pickup_latitude: Option<f64>,
    #[serde(default)]
    pub pickup_longitude: Option<f64>,
    #[serde(default)]
    pub destination_latitude: Option<f64>,
    #[serde(default)]
    pub destination_longitude: Option<f64>,
    pub departure_time: DateTime<Utc>,
    pub available_seats: u32,
    pub total_seats: u32,
    pub price_per_seat: f64,
    pub status: RideStatus,
}

impl Ride {
    pub fn pickup(&self) -> Option<GeoPoint> {
        point(self.pickup_latitude, self.pickup_longitude)
    }

    pub fn destination(&self) -> Option<GeoPoint> {
        point(self.destination_latitude, self.destination_longitude)
    }

    pub fn has_free_seats(&self) -> bool {
        self.status == RideStatus::Open && self.available_seats > 0
    }
}

fn point(latitude: Option<f64>, longitude: Option<f64>) -> Option<GeoPoint> {
    GeoPoint::new(latitude?, longitude?).ok()
}

/// One entry of a ride search, with the distance from the searched point when the server reports it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchHit {
    pub ride: Ride,
    #[serde(default, rename = "distance")]
    pub distance_km: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideSearch {
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers around the searched point.
    pub radius: f64,
    /// Minutes around now.
    pub time_window: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRide {
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub pickup_address: String,
    pub destination_latitude: f64,
    pub destination_longitude: f64,
    pub destination_address: String,
    pub departure_time: DateTime<Utc>,
    pub total_seats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_a_ride() -> Result<(), serde_json::Error> {
        let ride: Ride = serde_json::from_str(include_str!("../../tests/resources/ride.json"))?;

        assert_eq!(ride.id, 42);
        assert_eq!(ride.status, RideStatus::Open);
        assert_eq!(ride.pickup(), Some(GeoPoint::new(37.7749, -122.4194).unwrap()));
        assert_eq!(ride.destination(), Some(GeoPoint::new(37.7849, -122.4094).unwrap()));
        assert!(ride.has_free_seats());
        Ok(())
    }

    #[test]
    fn unknown_statuses_do_not_fail_deserialization() -> Result<(), serde_json::Error> {
        let status: RideStatus = serde_json::from_str(r#""scheduled""#)?;

        assert_eq!(status, RideStatus::Unknown);
        Ok(())
    }

    #[test]
    fn pickup_is_none_when_coordinates_are_missing() -> Result<(), serde_json::Error> {
        let ride: Ride = serde_json::from_str(
            r#"{
                "id": 1,
                "pickupAddress": "A",
                "destinationAddress": "B",
                "departureTime": "2025-06-01T08:30:00Z",
                "availableSeats": 0,
                "totalSeats": 4,
                "pricePerSeat": 15.5,
                "status": "full"
            }"#,
        )?;

        assert_eq!(ride.pickup(), None);
        assert!(!ride.has_free_seats());
        Ok(())
    }

    #[test]
    fn serializes_a_new_ride_in_camel_case() -> Result<(), serde_json::Error> {
        let new_ride = NewRide {
            pickup_latitude: 37.7749,
            pickup_longitude: -122.4194,
            pickup_address: "Market St".to_string(),
            destination_latitude: 37.7849,
            destination_longitude: -122.4094,
            destination_address: "Union Square".to_string(),
            departure_time: "2025-06-01T08:30:00Z".parse().unwrap(),
            total_seats: 3,
        };

        let json = serde_json::to_value(&new_ride)?;

        assert_eq!(
            json,
            serde_json::json!({
                "pickupLatitude": 37.7749,
                "pickupLongitude": -122.4194,
                "pickupAddress": "Market St",
                "destinationLatitude": 37.7849,
                "destinationLongitude": -122.4094,
                "destinationAddress": "Union Square",
                "departureTime": "2025-06-01T08:30:00Z",
                "totalSeats": 3
            })
        );
        Ok(())
    }
}
