use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::domain::{NewRide, Ride, RideSearch, SearchHit};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideRequestStatus {
    Pending,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// The backend's record of a seat request on someone else's ride.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRequest {
    pub id: u64,
    pub ride_id: u64,
    pub status: RideRequestStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestRideBody {
    ride_id: u64,
}

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn search_rides(&self, search: &RideSearch) -> Result<Vec<SearchHit>, ApiError> {
        info!("🔎 Searching rides...");
        let hits: Vec<SearchHit> = self.post("/rides/search", search).await?;
        info!("🔎 Searching rides... OK, {} found", hits.len());

        Ok(hits)
    }

    #[instrument(skip_all)]
    pub async fn create_ride(&self, ride: &NewRide) -> Result<Ride, ApiError> {
        info!("🚗 Offering ride from '{}' to '{}'...", ride.pickup_address, ride.destination_address);
        let created: Ride = self.post("/rides/create", ride).await?;
        info!(ride_id = created.id, "🚗 Offering ride... OK");

        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn request_ride(&self, ride_id: u64) -> Result<RideRequest, ApiError> {
        self.post("/rides/request", &RequestRideBody { ride_id }).await
    }

    #[instrument(skip(self))]
    pub async fn current_rides(&self) -> Result<Vec<Ride>, ApiError> {
        self.get("/rides/current").await
    }

    #[instrument(skip(self))]
    pub async fn past_rides(&self) -> Result<Vec<Ride>, ApiError> {
        self.get("/rides/past").await
    }

    #[instrument(skip(self))]
    pub async fn upcoming_rides(&self) -> Result<Vec<Ride>, ApiError> {
        self.get("/rides/upcoming").await
    }
}
