mod acquirer;
mod notice;
mod platform;

pub use acquirer::{LocationError, acquire_location, acquire_location_or_default};
pub use notice::{Notice, NoticeAction};
pub use platform::{LocationPlatform, PermissionStatus, PlatformError};
