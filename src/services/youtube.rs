/// YouTube Data API v3 client
///
/// Thin wrapper over the REST endpoints this service reads. Callers pass the
/// resource and its query parameters; the client adds the API key, checks the
/// status and hands back the parsed JSON body.
use crate::{config::Config, error::UpstreamError};
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::fmt::Display;

/// Query parameters for a single upstream request (the API key excluded)
pub type QueryParams = Vec<(&'static str, String)>;

/// YouTube Data API resources used by this service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Channels,
    Search,
    Playlists,
    PlaylistItems,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Channels => "channels",
            Resource::Search => "search",
            Resource::Playlists => "playlists",
            Resource::PlaylistItems => "playlistItems",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Trait for the upstream API
///
/// Lets handlers and the pagination helper run against a mock in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait YouTubeApi: Send + Sync {
    /// GET `resource` with `params` and return the JSON body
    ///
    /// Fails on transport errors, non-2xx statuses (keeping the raw body)
    /// and bodies that are not JSON. No retries.
    async fn get_json(&self, resource: Resource, params: &QueryParams)
        -> Result<Value, UpstreamError>;
}

#[derive(Clone)]
pub struct YouTubeClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.yt_api_key.clone(), config.yt_api_url.clone())
    }
}

#[async_trait::async_trait]
impl YouTubeApi for YouTubeClient {
    async fn get_json(
        &self,
        resource: Resource,
        params: &QueryParams,
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}/{}", self.api_url, resource.path());

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                // Strip the URL so the API key never reaches logs or clients
                let e = e.without_url();
                tracing::warn!(resource = %resource, error = %e, "YouTube API request failed");
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(|e| e.without_url())?;
            tracing::warn!(
                resource = %resource,
                status = status.as_u16(),
                "YouTube API returned an error status"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| e.without_url())?;
        let value: Value = serde_json::from_slice(&bytes)?;

        tracing::debug!(resource = %resource, bytes = bytes.len(), "YouTube API response received");

        Ok(value)
    }
}
