use crate::domain::{LocationSample, MapRegion, NewRide, RideSearch};
use crate::geo::{Tariff, ViewportDefaults, fit_region, haversine_km};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 10.0;
pub const DEFAULT_SEARCH_WINDOW_MIN: u32 = 60;

#[derive(Error, Debug, PartialEq)]
pub enum TripError {
    #[error("please select both pickup and destination locations")]
    MissingLocations,
    #[error("please select a pickup location")]
    MissingPickup,
    #[error("invalid number of seats: '{0}'")]
    InvalidSeats(String),
}

/// The pickup and destination a user is composing, with the map region that frames them.
#[derive(Clone, Debug)]
pub struct TripDraft {
    pickup: Option<LocationSample>,
    destination: Option<LocationSample>,
    region: MapRegion,
    viewport: ViewportDefaults,
}

impl TripDraft {
    pub fn new(initial_region: MapRegion, viewport: ViewportDefaults) -> Self {
        TripDraft {
            pickup: None,
            destination: None,
            region: initial_region,
            viewport,
        }
    }

    pub fn pickup(&self) -> Option<&LocationSample> {
        self.pickup.as_ref()
    }

    pub fn destination(&self) -> Option<&LocationSample> {
        self.destination.as_ref()
    }

    pub fn region(&self) -> &MapRegion {
        &self.region
    }

    pub fn set_pickup(&mut self, pickup: LocationSample) {
        self.pickup = Some(pickup);
        self.refit();
    }

    pub fn set_destination(&mut self, destination: LocationSample) {
        self.destination = Some(destination);
        self.refit();
    }

    /// Centers the map on the device position without touching the selected points.
    pub fn center_on(&mut self, sample: &LocationSample) {
        self.region = self.viewport.region_around(&sample.coords);
    }

    fn refit(&mut self) {
        let pickup = self.pickup.as_ref().map(|p| &p.coords);
        let destination = self.destination.as_ref().map(|d| &d.coords);

        if let Some(region) = fit_region(pickup, destination, &self.viewport) {
            debug!(?region, "Refitted map region");
            self.region = region;
        }
    }

    pub fn distance_km(&self) -> Option<f64> {
        match (&self.pickup, &self.destination) {
            (Some(pickup), Some(destination)) => Some(haversine_km(&pickup.coords, &destination.coords)),
            _ => None,
        }
    }

    /// The estimated price, or 0 until both points are known.
    pub fn price(&self, tariff: &Tariff) -> u64 {
        self.distance_km().map(|distance| tariff.estimate_price(distance)).unwrap_or(0)
    }

    /// Validates the draft and turns it into a ride offer. `total_seats` is the raw user input.
    pub fn offer(&self, departure_time: DateTime<Utc>, total_seats: &str) -> Result<NewRide, TripError> {
        let (Some(pickup), Some(destination)) = (&self.pickup, &self.destination) else {
            return Err(TripError::MissingLocations);
        };

        let total_seats = total_seats
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|seats| *seats > 0)
            .ok_or_else(|| TripError::InvalidSeats(total_seats.to_string()))?;

        Ok(NewRide {
            pickup_latitude: pickup.coords.latitude(),
            pickup_longitude: pickup.coords.longitude(),
            pickup_address: pickup.label(),
            destination_latitude: destination.coords.latitude(),
            destination_longitude: destination.coords.longitude(),
            destination_address: destination.label(),
            departure_time,
            total_seats,
        })
    }

    /// Searches around the pickup. Both points must be set, like the search form requires.
    pub fn search(&self, radius_km: f64, time_window_min: u32) -> Result<RideSearch, TripError> {
        let Some(pickup) = &self.pickup else {
            return Err(TripError::MissingPickup);
        };
        if self.destination.is_none() {
            return Err(TripError::MissingLocations);
        }

        Ok(RideSearch {
            latitude: pickup.coords.latitude(),
            longitude: pickup.coords.longitude(),
            radius: radius_km,
            time_window: time_window_min,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn viewport() -> ViewportDefaults {
        ViewportDefaults {
            latitude_delta: 0.0922,
            longitude_delta: 0.0421,
            pad_factor: 1.5,
        }
    }

    fn initial_region() -> MapRegion {
        viewport().region_around(&GeoPoint::new(37.78825, -122.4324).unwrap())
    }

    fn sample(latitude: f64, longitude: f64, address: &str) -> LocationSample {
        LocationSample::with_address(GeoPoint::new(latitude, longitude).unwrap(), address)
    }

    fn departure() -> DateTime<Utc> {
        "2025-06-01T08:30:00Z".parse().unwrap()
    }

    fn complete_draft() -> TripDraft {
        let mut draft = TripDraft::new(initial_region(), viewport());
        draft.set_pickup(sample(37.7749, -122.4194, "Market St"));
        draft.set_destination(sample(37.7849, -122.4094, "Union Square"));
        draft
    }

    #[test]
    fn keeps_the_initial_region_until_a_point_is_set() {
        let draft = TripDraft::new(initial_region(), viewport());

        assert_eq!(draft.region(), &initial_region());
        assert_eq!(draft.price(&Tariff::default()), 0);
    }

    #[test]
    fn a_single_point_centers_the_map() {
        let mut draft = TripDraft::new(initial_region(), viewport());

        draft.set_destination(sample(51.86, 4.358, "Delft"));

        assert_eq!(draft.region(), &viewport().region_around(&GeoPoint::new(51.86, 4.358).unwrap()));
        assert_eq!(draft.distance_km(), None);
    }

    #[test]
    fn both_points_frame_the_trip_and_price_it() {
        let draft = complete_draft();

        let region = draft.region();
        assert!((region.center.latitude() - 37.7799).abs() < 1e-9);
        assert!((region.latitude_delta - 0.015).abs() < 1e-9);
        assert_eq!(draft.price(&Tariff::default()), 14);
    }

    #[test]
    fn center_on_moves_the_map_only() {
        let mut draft = complete_draft();
        let here = sample(40.7128, -74.006, "Current Location");

        draft.center_on(&here);

        assert_eq!(draft.region().center, here.coords);
        assert_eq!(draft.pickup().map(|p| p.label()), Some("Market St".to_string()));
    }

    #[test]
    fn offer_builds_a_new_ride() {
        let ride = complete_draft().offer(departure(), " 3 ").unwrap();

        assert_eq!(
            ride,
            NewRide {
                pickup_latitude: 37.7749,
                pickup_longitude: -122.4194,
                pickup_address: "Market St".to_string(),
                destination_latitude: 37.7849,
                destination_longitude: -122.4094,
                destination_address: "Union Square".to_string(),
                departure_time: departure(),
                total_seats: 3,
            }
        );
    }

    #[test]
    fn offer_requires_both_points() {
        let mut draft = TripDraft::new(initial_region(), viewport());
        draft.set_pickup(sample(37.7749, -122.4194, "Market St"));

        assert_eq!(draft.offer(departure(), "4"), Err(TripError::MissingLocations));
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("-2")]
    #[case("four")]
    fn offer_rejects_invalid_seat_counts(#[case] seats: &str) {
        assert_eq!(complete_draft().offer(departure(), seats), Err(TripError::InvalidSeats(seats.to_string())));
    }

    #[test]
    fn search_is_centered_on_the_pickup() {
        let search = complete_draft().search(20.0, 120).unwrap();

        assert_eq!(
            search,
            RideSearch {
                latitude: 37.7749,
                longitude: -122.4194,
                radius: 20.0,
                time_window: 120,
            }
        );
    }

    #[test]
    fn search_requires_a_pickup() {
        let mut draft = TripDraft::new(initial_region(), viewport());
        draft.set_destination(sample(37.7849, -122.4094, "Union Square"));

        assert_eq!(draft.search(DEFAULT_SEARCH_RADIUS_KM, DEFAULT_SEARCH_WINDOW_MIN), Err(TripError::MissingPickup));
    }
}
