pub mod api;
pub mod app_config;
pub mod chat;
pub mod domain;
pub mod geo;
mod geo_point_deserializer;
pub mod location;
pub mod session;
pub mod trip;
