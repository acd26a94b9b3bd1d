use crate::session::token_store::{TokenStore, TokenStoreError};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("refusing to sign in with an empty token")]
    EmptyToken,
    #[error("unable to persist the session: {0}")]
    Store(#[from] TokenStoreError),
}

/// The credential of a signed-in user.
#[derive(Clone, PartialEq)]
pub struct AuthSession {
    token: String,
}

impl AuthSession {
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession").field("token", &"<redacted>").finish()
    }
}

/// Holds the signed-in state and keeps it in sync with the token store.
pub struct Session {
    store: Arc<dyn TokenStore>,
    current: RwLock<Option<AuthSession>>,
}

impl Session {
    /// Reads the persisted token. A token that can't be read is cleared and the session starts signed out.
    #[instrument(skip_all)]
    pub async fn restore(store: Arc<dyn TokenStore>) -> Self {
        let current = match store.load().await {
            Ok(Some(token)) if !token.trim().is_empty() => {
                info!("🔑 Restored session");
                Some(AuthSession { token })
            }
            Ok(Some(_)) => {
                warn!("⚠️ Stored token is empty, signing out");
                Self::discard(store.as_ref()).await;
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!("⚠️ Unable to read the stored token, signing out: {}", e);
                Self::discard(store.as_ref()).await;
                None
            }
        };

        Session {
            store,
            current: RwLock::new(current),
        }
    }

    async fn discard(store: &dyn TokenStore) {
        if let Err(e) = store.clear().await {
            warn!("⚠️ Unable to clear the stored token: {}", e);
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn bearer(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|session| session.token.clone())
    }

    #[instrument(skip_all)]
    pub async fn sign_in(&self, token: impl Into<String>) -> Result<(), SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.store.save(&token).await?;
        *self.current.write().await = Some(AuthSession { token });
        info!("🔑 Signed in");
        Ok(())
    }

    #[instrument(skip_all)]
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        *self.current.write().await = None;
        self.store.clear().await?;
        info!("🔒 Signed out");
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
