mod auth;
mod client;
mod error;
mod response;
mod rides;

pub use client::ApiClient;
pub use error::ApiError;
pub use response::ApiResponse;
pub use rides::{RideRequest, RideRequestStatus};
