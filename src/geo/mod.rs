mod haversine;
mod viewport;

pub use haversine::{Tariff, haversine_km};
pub use viewport::{ViewportDefaults, fit_region};
