mod geo_point;
mod location_sample;
mod map_region;
mod message;
mod ride;
mod user;

pub use geo_point::{GeoPoint, GeoPointError};
pub use location_sample::LocationSample;
pub use map_region::MapRegion;
pub use message::ChatMessage;
pub use ride::{NewRide, Ride, RideSearch, RideStatus, SearchHit};
pub use user::{Registration, Role, User};
