use crate::api::error::ApiError;
use serde::Deserialize;

/// The envelope every endpoint answers with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(rejected(self.error));
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// For endpoints that only acknowledge; any data is ignored.
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success { Ok(()) } else { Err(rejected(self.error)) }
    }
}

fn rejected(error: Option<String>) -> ApiError {
    ApiError::Rejected(error.filter(|e| !e.is_empty()).unwrap_or_else(|| "unknown error".to_string()))
}
