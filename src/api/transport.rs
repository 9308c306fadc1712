use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::HeaderMap};
use thiserror::Error;

use crate::config::AppConfig;

/// Connection-level failure: DNS, refused connection, timeout, broken body.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

/// The only thing the client needs from HTTP: a GET with headers and query
/// parameters that hands back the status and raw body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        params: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError>;
}

pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("unable to construct http client")?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        params: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .http
            .get(url)
            .headers(headers.clone())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
