use crate::location::acquirer::LocationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeAction {
    OpenSettings,
    Retry,
    ManualEntry,
    Dismiss,
}

/// A message for the user explaining what went wrong and what they can do next.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
    pub actions: Vec<NoticeAction>,
}

impl LocationError {
    pub fn notice(&self) -> Notice {
        match self {
            LocationError::ServicesDisabled => Notice {
                title: "Location Services Disabled",
                message: "Location services are disabled on your device. Please enable location services in your device settings and try again.",
                actions: vec![NoticeAction::Dismiss, NoticeAction::OpenSettings],
            },
            LocationError::PermissionDenied => Notice {
                title: "Permission Denied",
                message: "Location permission is required to set pickup/destination points. You can still manually enter locations.",
                actions: vec![NoticeAction::ManualEntry],
            },
            LocationError::Timeout(_) => Notice {
                title: "Location Timeout",
                message: "Unable to get your current location within the time limit. You can still manually enter pickup and destination locations.",
                actions: vec![NoticeAction::Retry, NoticeAction::ManualEntry],
            },
            LocationError::Unavailable(_) => Notice {
                title: "Location Unavailable",
                message: "Unable to get your current location. You can still manually enter pickup and destination locations.\n\nPlease check:\n• Location services are enabled\n• You have granted location permissions\n• Your device has GPS capability",
                actions: vec![NoticeAction::Retry, NoticeAction::ManualEntry],
            },
        }
    }
}
