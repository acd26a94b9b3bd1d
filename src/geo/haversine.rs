use crate::domain::GeoPoint;
use serde::Deserialize;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1_rad = a.latitude().to_radians();
    let lat2_rad = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lng = (b.longitude() - a.longitude()).to_radians();

    // Rounding can push h just past 1 for near-antipodal points.
    let h = ((delta_lat / 2.0).sin().powi(2) + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2)).clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// A linear per-kilometer tariff.
#[derive(Clone, Debug, Deserialize)]
pub struct Tariff {
    rate_per_km: f64,
}

impl Tariff {
    pub fn new(rate_per_km: f64) -> Self {
        Tariff { rate_per_km }
    }

    pub fn rate_per_km(&self) -> f64 {
        self.rate_per_km
    }

    pub fn estimate_price(&self, distance_km: f64) -> u64 {
        (distance_km.max(0.0) * self.rate_per_km).round() as u64
    }

    pub fn estimate_trip(&self, from: &GeoPoint, to: &GeoPoint) -> u64 {
        self.estimate_price(haversine_km(from, to))
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Tariff { rate_per_km: 10.0 }
    }
}
