use std::sync::Arc;

use anyhow::Context;
use log::{debug, info};
use reqwest::header;
use serde_json::Value;
use thiserror::Error;

use crate::api::transport::{HttpTransport, Transport, TransportError};
use crate::config::AppConfig;
use crate::models::artist::{Artist, ArtistId, Resolution};

#[derive(Debug, Error)]
pub enum GeniusError {
    #[error("API request failed: {0}")]
    Request(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("no artist found for search term: {0}")]
    NotFound(String),
}

impl From<TransportError> for GeniusError {
    fn from(err: TransportError) -> Self {
        GeniusError::Request(err.to_string())
    }
}

#[derive(Clone)]
pub struct GeniusClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    base_headers: header::HeaderMap,
}

impl GeniusClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(
        config: &AppConfig,
        transport: Arc<dyn Transport>,
    ) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        let mut bearer =
            header::HeaderValue::from_str(&format!("Bearer {}", config.access_token()))
                .context("invalid access token header value")?;
        bearer.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, bearer);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(config.user_agent())
                .context("invalid user agent header value")?,
        );
        headers.insert(
            "X-Client-Id",
            header::HeaderValue::from_str(config.client_id())
                .context("invalid client identifier header value")?,
        );

        Ok(Self {
            transport,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            base_headers: headers,
        })
    }

    /// Single authenticated GET against `endpoint`, returning the JSON body
    /// untouched. Non-2xx statuses and connection faults are not retried.
    pub async fn request(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, GeniusError> {
        let url = self.endpoint_url(endpoint);
        debug!("GET {url} {params:?}");

        let response = self
            .transport
            .get(&url, &self.base_headers, params)
            .await?;

        if !response.status.is_success() {
            return Err(GeniusError::Request(format!(
                "{} for url {url}",
                response.status
            )));
        }

        serde_json::from_str(&response.body).map_err(|err| GeniusError::Parse(err.to_string()))
    }

    pub async fn search(&self, term: &str) -> Result<Value, GeniusError> {
        self.request("/search", &[("q", term)]).await
    }

    pub async fn resolve(&self, term: &str) -> Result<Resolution, GeniusError> {
        let results = self.search(term).await?;
        Ok(extract_artist_id(&results).into())
    }

    pub async fn get_artist_by_id(&self, id: ArtistId) -> Result<Value, GeniusError> {
        self.request(&format!("/artists/{id}"), &[]).await
    }

    /// Searches for `term`, takes the primary artist of the first hit and
    /// returns the raw `/artists/{id}` payload, `response.artist` envelope
    /// included.
    pub async fn get_artist(&self, term: &str) -> Result<Value, GeniusError> {
        match self.resolve(term).await? {
            Resolution::Found(id) => {
                info!("Resolved '{term}' to artist {id}");
                self.get_artist_by_id(id).await
            }
            Resolution::NotFound => Err(GeniusError::NotFound(term.to_string())),
        }
    }

    pub async fn get_artist_profile(&self, term: &str) -> Result<Artist, GeniusError> {
        let payload = self.get_artist(term).await?;
        Ok(Artist::from_payload(&payload))
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }
}

/// Primary artist id of the first search hit. Upstream ordering is trusted,
/// hits are never re-ranked. Any missing key on the way, or an id that is not
/// a positive integer, means no match.
pub fn extract_artist_id(search: &Value) -> Option<ArtistId> {
    search
        .pointer("/response/hits/0/result/primary_artist/id")
        .and_then(Value::as_u64)
        .filter(|id| *id != 0)
        .map(ArtistId)
}
