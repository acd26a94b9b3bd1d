use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::domain::{Registration, User};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct Credentials {
    token: String,
    #[serde(default)]
    user: Option<User>,
}

impl ApiClient {
    /// Signs in and stores the returned token in the session.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>, ApiError> {
        info!("🔑 Logging in...");
        let credentials: Credentials = self.post("/auth/login", &LoginRequest { email, password }).await?;
        self.session().sign_in(credentials.token).await?;
        info!("🔑 Logging in... OK");

        Ok(credentials.user)
    }

    /// Creates an account and signs in with it.
    #[instrument(skip_all, fields(email = %registration.email, role = ?registration.role))]
    pub async fn register(&self, registration: &Registration) -> Result<Option<User>, ApiError> {
        info!("🔑 Registering...");
        let credentials: Credentials = self.post("/auth/register", registration).await?;
        self.session().sign_in(credentials.token).await?;
        info!("🔑 Registering... OK");

        Ok(credentials.user)
    }

    /// Tells the backend to end the session, then clears the local one whatever the backend answered.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let remote = self.post_ack("/auth/logout").await;
        if let Err(e) = &remote {
            warn!("⚠️ Backend logout failed, clearing the local session anyway: {}", e);
        }

        self.session().sign_out().await?;
        remote
    }

    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<User, ApiError> {
        if !self.session().is_authenticated().await {
            return Err(ApiError::NotAuthenticated);
        }
        self.get("/auth/profile").await
    }
}
