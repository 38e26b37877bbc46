use magic_session_core::{
    AuthBackend, BackendCallError, BackendReply, BackendRequestEnvelope, ReplyBody,
};
use reqwest::{Client, Url};
use thiserror::Error;

use crate::config::AuthServerSettings;

/// Auth server reached over HTTP.
///
/// Every `invoke` is a single POST of the envelope as JSON. The only timeout
/// is the one configured on the `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    http_client: Client,
    url: Url,
}

#[derive(Debug, Error)]
pub enum HttpAuthBackendError {
    #[error("Invalid auth server URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl HttpAuthBackend {
    pub fn new(url: Url, http_client: Client) -> Self {
        Self { http_client, url }
    }

    pub fn from_settings(settings: &AuthServerSettings) -> Result<Self, HttpAuthBackendError> {
        let url =
            Url::parse(&settings.url).map_err(|e| HttpAuthBackendError::InvalidUrl(e.to_string()))?;

        let http_client = Client::builder().timeout(settings.timeout()).build()?;

        Ok(Self::new(url, http_client))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait::async_trait]
impl AuthBackend for HttpAuthBackend {
    #[tracing::instrument(
        name = "Calling auth server",
        skip_all,
        fields(interface = %envelope.interface.interface_name)
    )]
    async fn invoke(
        &self,
        envelope: &BackendRequestEnvelope,
    ) -> Result<BackendReply, BackendCallError> {
        let response = self
            .http_client
            .post(self.url.clone())
            .json(envelope)
            .send()
            .await
            .map_err(|e| BackendCallError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let raw = response
            .text()
            .await
            .map_err(|e| BackendCallError::Transport(e.to_string()))?;

        tracing::debug!(status, "auth server replied");

        Ok(BackendReply::new(status, ReplyBody::parse(raw)))
    }
}
