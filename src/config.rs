use std::time::Duration;

use uuid::Uuid;

pub const DEFAULT_BASE_URL: &str = "https://api.genius.com";

/// Static configuration shared by the HTTP client and the report builder.
#[derive(Clone, Debug)]
pub struct AppConfig {
    access_token: String,
    base_url: String,
    user_agent: String,
    client_id: String,
    timeout: Option<Duration>,
    concurrency: usize,
}

impl AppConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        let client_id = format!("genius-artists-{}", Uuid::new_v4());
        let user_agent = format!(
            "genius-artists/{} ( unique-id={client_id} )",
            env!("CARGO_PKG_VERSION")
        );

        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent,
            client_id,
            timeout: None,
            concurrency: 1,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Number of search terms processed at once by the concurrent report
    /// builder. Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_uses_public_api_without_timeout() {
        let config = AppConfig::new("secret");
        assert_eq!(config.access_token(), "secret");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.timeout().is_none());
        assert_eq!(config.concurrency(), 1);
        assert!(config.user_agent().contains(config.client_id()));
    }

    #[test]
    fn base_url_drops_trailing_slashes() {
        let config = AppConfig::new("t").with_base_url("http://localhost:8080//");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        let config = AppConfig::new("t").with_concurrency(0);
        assert_eq!(config.concurrency(), 1);
    }
}
