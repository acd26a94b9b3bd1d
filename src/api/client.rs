use crate::api::error::ApiError;
use crate::api::response::ApiResponse;
use crate::app_config::AppConfig;
use crate::session::Session;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP client for the ride-sharing backend. Attaches the session's bearer token to every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Arc<Session>) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.api().request_timeout()).build()?;

        Ok(ApiClient {
            client,
            base_url: config.api().url().to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::GET, path).await?).await?;
        decode::<T>(response).await?.into_result()
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::POST, path).await?.json(body)).await?;
        decode::<T>(response).await?.into_result()
    }

    pub(crate) async fn post_ack(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(self.request(Method::POST, path).await?).await?;
        decode::<serde_json::Value>(response).await?.into_ack()
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self.client.request(method, format!("{}{}", self.base_url, path));

        match self.session.bearer().await {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
                value.set_sensitive(true);
                Ok(builder.header(AUTHORIZATION, value))
            }
            None => Ok(builder),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        debug!(status = %response.status(), url = %response.url(), "Received response");
        Ok(response)
    }
}

async fn decode<T>(response: Response) -> Result<ApiResponse<T>, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<ApiResponse<T>>(&body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => {
            warn!(status_code = %status, "⚠️ Request failed. Response: {:?}", body);
            Err(ApiError::Status { status, body })
        }
        Err(e) => Err(ApiError::Decode(e)),
    }
}
