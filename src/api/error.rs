use crate::session::{SessionError, TokenStoreError};
use reqwest::StatusCode;
use reqwest::header;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid authorization header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unable to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("response did not contain any data")]
    MissingData,
    #[error("no authentication token found")]
    NotAuthenticated,
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl From<TokenStoreError> for ApiError {
    fn from(e: TokenStoreError) -> Self {
        ApiError::Session(e.into())
    }
}
