//! Authentication endpoints.

use tracing::info;

use aria_core::{AuthSession, LoginCredentials, RegisterCredentials, User};

use crate::client::AriaClient;
use crate::error::{ClientError, Result};

impl AriaClient {
    /// Login with email and password.
    ///
    /// On success, the access token is stored for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let credentials = LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let session: AuthSession = match self.post("/api/v1/auth/login", &credentials).await {
            Ok(session) => session,
            Err(ClientError::AuthRequired) => {
                return Err(ClientError::AuthFailed("invalid email or password".into()));
            }
            Err(e) => return Err(e),
        };

        self.set_access_token(session.tokens.access_token.clone())
            .await;
        info!(user = %session.user.email, "Logged in");

        Ok(session)
    }

    /// Register a new account.
    ///
    /// The server logs the new account in; its token is stored like after
    /// `login`.
    pub async fn register(&self, credentials: RegisterCredentials) -> Result<AuthSession> {
        let session: AuthSession = self.post("/api/v1/auth/register", &credentials).await?;

        self.set_access_token(session.tokens.access_token.clone())
            .await;
        info!(user = %session.user.email, "Registered");

        Ok(session)
    }

    /// Fetch the currently authenticated user.
    pub async fn current_user(&self) -> Result<User> {
        self.get("/api/v1/auth/me").await
    }
}
