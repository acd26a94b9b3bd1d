use crate::domain::GeoPoint;
use serde::Serialize;

/// A map viewport: its center and the span shown on each axis, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
    pub center: GeoPoint,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}
