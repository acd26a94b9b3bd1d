use crate::domain::LocationSample;
use async_trait::async_trait;
use std::error::Error;

pub type PlatformError = Box<dyn Error + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// The device's location services, as exposed by the host platform.
#[async_trait]
pub trait LocationPlatform: Send + Sync {
    async fn services_enabled(&self) -> Result<bool, PlatformError>;

    async fn request_foreground_permission(&self) -> Result<PermissionStatus, PlatformError>;

    /// May never complete; callers bound it with a timeout.
    async fn current_position(&self) -> Result<LocationSample, PlatformError>;
}
