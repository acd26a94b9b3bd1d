use crate::domain::{GeoPoint, MapRegion};

/// Spans used when there is nothing to frame, plus the padding applied around two points.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportDefaults {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
    pub pad_factor: f64,
}

impl ViewportDefaults {
    /// Scales the longitude span by the screen's width / height ratio.
    pub fn for_aspect_ratio(latitude_delta: f64, aspect_ratio: f64, pad_factor: f64) -> Self {
        ViewportDefaults {
            latitude_delta,
            longitude_delta: latitude_delta * aspect_ratio,
            pad_factor,
        }
    }

    pub fn region_around(&self, center: &GeoPoint) -> MapRegion {
        MapRegion {
            center: *center,
            latitude_delta: self.latitude_delta,
            longitude_delta: self.longitude_delta,
        }
    }
}

/// Computes a region framing the given points. Returns `None` without points so the caller keeps its current region.
pub fn fit_region(a: Option<&GeoPoint>, b: Option<&GeoPoint>, defaults: &ViewportDefaults) -> Option<MapRegion> {
    match (a, b) {
        (Some(a), Some(b)) => {
            let latitude_delta = (a.latitude() - b.latitude()).abs() * defaults.pad_factor;
            let longitude_delta = (a.longitude() - b.longitude()).abs() * defaults.pad_factor;

            Some(MapRegion {
                center: a.midpoint(b),
                latitude_delta: non_degenerate(latitude_delta, defaults.latitude_delta),
                longitude_delta: non_degenerate(longitude_delta, defaults.longitude_delta),
            })
        }
        (Some(point), None) | (None, Some(point)) => Some(defaults.region_around(point)),
        (None, None) => None,
    }
}

fn non_degenerate(delta: f64, fallback: f64) -> f64 {
    if delta > 0.0 { delta } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEFAULTS: ViewportDefaults = ViewportDefaults {
        latitude_delta: 0.0922,
        longitude_delta: 0.0421,
        pad_factor: 1.5,
    };

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    #[test]
    fn frames_both_points_with_padding() {
        let pickup = point(37.7749, -122.4194);
        let destination = point(37.7849, -122.4094);

        let region = fit_region(Some(&pickup), Some(&destination), &DEFAULTS).unwrap();

        assert!((region.center.latitude() - 37.7799).abs() < 1e-9);
        assert!((region.center.longitude() - -122.4144).abs() < 1e-9);
        assert!((region.latitude_delta - 0.015).abs() < 1e-9);
        assert!((region.longitude_delta - 0.015).abs() < 1e-9);
    }

    #[test]
    fn point_order_does_not_matter() {
        let a = point(10.0, 20.0);
        let b = point(-5.0, 30.0);

        assert_eq!(fit_region(Some(&a), Some(&b), &DEFAULTS), fit_region(Some(&b), Some(&a), &DEFAULTS));
    }

    #[test]
    fn equal_points_fall_back_to_default_deltas_on_both_axes() {
        let a = point(37.7749, -122.4194);

        let region = fit_region(Some(&a), Some(&a), &DEFAULTS).unwrap();

        assert_eq!(
            region,
            MapRegion {
                center: a,
                latitude_delta: DEFAULTS.latitude_delta,
                longitude_delta: DEFAULTS.longitude_delta,
            }
        );
    }

    #[test]
    fn zero_latitude_span_only_replaces_the_latitude_delta() {
        let region = fit_region(Some(&point(0.0, 0.0)), Some(&point(0.0, 10.0)), &DEFAULTS).unwrap();

        assert_eq!(
            region,
            MapRegion {
                center: point(0.0, 5.0),
                latitude_delta: DEFAULTS.latitude_delta,
                longitude_delta: 15.0,
            }
        );
    }

    #[test]
    fn single_pickup_is_centered_with_default_deltas() {
        let a = point(51.8615899, 4.3580323);

        assert_eq!(fit_region(Some(&a), None, &DEFAULTS), Some(DEFAULTS.region_around(&a)));
    }

    #[test]
    fn single_destination_is_centered_with_default_deltas() {
        let b = point(51.8615899, 4.3580323);

        assert_eq!(
            fit_region(None, Some(&b), &DEFAULTS),
            Some(MapRegion {
                center: b,
                latitude_delta: 0.0922,
                longitude_delta: 0.0421,
            })
        );
    }

    #[test]
    fn no_points_leaves_the_region_to_the_caller() {
        assert_eq!(fit_region(None, None, &DEFAULTS), None);
    }

    #[test]
    fn for_aspect_ratio_scales_the_longitude_delta() {
        let defaults = ViewportDefaults::for_aspect_ratio(0.0922, 0.5, 1.5);

        assert_eq!(defaults.longitude_delta, 0.0461);
    }
}
