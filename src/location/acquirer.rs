use crate::domain::{GeoPoint, LocationSample};
use crate::location::platform::{LocationPlatform, PermissionStatus};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("location services are disabled")]
    ServicesDisabled,
    #[error("location permission was not granted")]
    PermissionDenied,
    #[error("location request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Acquires the device position, giving up after `wait`.
///
/// The position request is dropped once the timer fires, so a late fix can never replace the timeout.
#[instrument(skip(platform))]
pub async fn acquire_location(platform: &dyn LocationPlatform, wait: Duration) -> Result<LocationSample, LocationError> {
    info!("📍 Acquiring location...");

    let services_enabled = platform
        .services_enabled()
        .await
        .map_err(|e| LocationError::Unavailable(e.to_string()))?;
    if !services_enabled {
        warn!("⚠️ Location services are disabled");
        return Err(LocationError::ServicesDisabled);
    }

    let permission = platform
        .request_foreground_permission()
        .await
        .map_err(|e| LocationError::Unavailable(e.to_string()))?;
    if permission != PermissionStatus::Granted {
        warn!(?permission, "⚠️ Location permission not granted");
        return Err(LocationError::PermissionDenied);
    }

    match timeout(wait, platform.current_position()).await {
        Ok(Ok(sample)) => {
            info!("📍 Acquiring location... OK");
            Ok(sample)
        }
        Ok(Err(e)) => {
            warn!("⚠️ Unable to get the current position: {}", e);
            Err(LocationError::Unavailable(e.to_string()))
        }
        Err(_) => {
            warn!("⏳ No position within {}ms", wait.as_millis());
            Err(LocationError::Timeout(wait))
        }
    }
}

/// Like [`acquire_location`], but falls back to `default` and hands back the error that caused it.
pub async fn acquire_location_or_default(
    platform: &dyn LocationPlatform,
    wait: Duration,
    default: GeoPoint,
) -> (LocationSample, Option<LocationError>) {
    match acquire_location(platform, wait).await {
        Ok(sample) => (sample, None),
        Err(e) => {
            info!("📍 Using the default location {}, {}", default.latitude(), default.longitude());
            (LocationSample::new(default), Some(e))
        }
    }
}
