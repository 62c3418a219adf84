//! Main Aria server client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use aria_core::ApiResponse;

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;

/// Client for the Aria streaming server.
///
/// Handles authentication and the response envelope; endpoint groups live
/// in the `auth`, `catalog`, and `streaming` modules. Clone-free sharing
/// works through `Arc<AriaClient>`, which also satisfies the playback
/// crate's `StreamResolver` and `HistoryRecorder` traits.
pub struct AriaClient {
    pub(crate) http: Client,
    pub(crate) config: Arc<RwLock<ClientConfig>>,
}

impl AriaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized = ClientConfig {
            base_url,
            access_token: config.access_token,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("AriaPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized)),
        })
    }

    /// Get the server base URL.
    pub async fn base_url(&self) -> String {
        self.config.read().await.base_url.clone()
    }

    /// Check whether the client has an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    /// Get the stored access token.
    pub async fn access_token(&self) -> Option<String> {
        self.config.read().await.access_token.clone()
    }

    /// Set the access token directly (e.g. from stored credentials).
    pub async fn set_access_token(&self, token: String) {
        self.config.write().await.access_token = Some(token);
    }

    /// Clear the stored token (logout).
    pub async fn logout(&self) {
        self.config.write().await.access_token = None;
        info!("Logged out");
    }

    /// GET an envelope-wrapped resource.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url().await, path);
        debug!(url = %url, "GET");
        let response = self.send(self.http.get(&url)).await?;
        Self::decode(response).await
    }

    /// GET a paginated list endpoint.
    pub(crate) async fn get_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        page: Option<u32>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url().await, path);
        debug!(url = %url, page = ?page, "GET");
        let mut request = self.http.get(&url);
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// GET with arbitrary query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url().await, path);
        debug!(url = %url, "GET");
        let response = self.send(self.http.get(&url).query(query)).await?;
        Self::decode(response).await
    }

    /// POST a JSON body, decoding the envelope-wrapped reply.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url().await, path);
        debug!(url = %url, "POST");
        let response = self.send(self.http.post(&url).json(body)).await?;
        Self::decode(response).await
    }

    /// Attach the bearer token (when present) and send, distinguishing an
    /// unreachable server from other transport failures.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = match self.access_token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }

    /// Unwrap the `{ data, error, meta }` envelope.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::AuthRequired);
        }

        let body = response.text().await.map_err(ClientError::Request)?;
        let envelope: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                return Err(ClientError::ParseError(format!(
                    "invalid response body: {e}"
                )));
            }
            // Non-envelope error bodies (proxies, crashes) surface raw.
            Err(_) => {
                return Err(ClientError::ServerError {
                    status: status.as_u16(),
                    message: body,
                });
            }
        };

        if let Some(message) = envelope.error {
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            });
        }
        envelope.data.ok_or_else(|| {
            ClientError::ParseError("response envelope carried no data".to_string())
        })
    }
}
