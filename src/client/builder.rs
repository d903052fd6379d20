//! Client construction

use crate::client::OpenTokClient;
use crate::config::settings::{DEFAULT_API_URL, NetworkSettings};
use crate::transport::{
    HttpTransport, PartnerAuthFilter, RequestFilter, ReqwestTransport, UserAgentFilter,
};
use crate::{Error, Result};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Immutable configuration of a built client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: u64,
    pub api_secret: String,
    /// Base URL without trailing slash
    pub api_url: String,
    pub user_agent: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`OpenTokClient`]
///
/// ```no_run
/// use opentok_client::OpenTokClient;
///
/// # fn example() -> opentok_client::Result<()> {
/// let client = OpenTokClient::builder(123456, "secret")
///     .api_url("https://api.opentok.com")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: u64,
    api_secret: String,
    api_url: Option<String>,
    network: NetworkSettings,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn HttpTransport>>,
    filters: Vec<Arc<dyn RequestFilter>>,
}

impl ClientBuilder {
    pub fn new(api_key: u64, api_secret: impl Into<String>) -> Self {
        Self {
            api_key,
            api_secret: api_secret.into(),
            api_url: None,
            network: NetworkSettings::default(),
            timeout: None,
            transport: None,
            filters: Vec::new(),
        }
    }

    /// Override the API base URL
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Override the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.network.user_agent = user_agent.into();
        self
    }

    /// Whole-request timeout for the default transport
    ///
    /// Takes precedence over `timeout_secs` in the network settings.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace all network settings of the default transport
    pub fn network(mut self, network: NetworkSettings) -> Self {
        self.network = network;
        self
    }

    /// Use a custom transport instead of the reqwest one
    pub fn transport<T: HttpTransport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Use a shared transport
    pub fn shared_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Add a filter that runs before the partner auth filter
    pub fn filter<F: RequestFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Validate the configuration and build the client
    pub fn build(self) -> Result<OpenTokClient> {
        if self.api_secret.is_empty() {
            return Err(Error::config("api_secret", "api secret cannot be empty"));
        }

        let api_url = self
            .api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        url::Url::parse(&api_url)?;
        let api_url = api_url.trim_end_matches('/').to_string();

        if self.timeout == Some(Duration::ZERO) {
            return Err(Error::config("timeout", "timeout cannot be zero"));
        }
        let timeout = self.timeout.or_else(|| self.network.timeout());

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::configured(&self.network, timeout)?),
        };

        let mut filters: Vec<Arc<dyn RequestFilter>> =
            vec![Arc::new(UserAgentFilter::new(self.network.user_agent.clone()))];
        filters.extend(self.filters);
        filters.push(Arc::new(PartnerAuthFilter::new(
            self.api_key,
            self.api_secret.clone(),
        )));

        let config = ClientConfig {
            api_key: self.api_key,
            api_secret: self.api_secret,
            api_url,
            user_agent: self.network.user_agent,
        };

        Ok(OpenTokClient::from_parts(config, transport, filters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let client = ClientBuilder::new(1, "secret").build().unwrap();
        assert_eq!(client.config().api_url, "https://api.opentok.com");
        assert!(client.config().user_agent.starts_with("opentok-rust-sdk/"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ClientBuilder::new(1, "secret")
            .api_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.config().api_url, "http://localhost:8080");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = ClientBuilder::new(1, "secret").api_url("::not-a-url").build();
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = ClientBuilder::new(1, "").build();
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_timeout_kept_exactly() {
        let builder = ClientBuilder::new(1, "secret").timeout(Duration::from_millis(2500));
        assert_eq!(builder.timeout, Some(Duration::from_millis(2500)));

        let builder = ClientBuilder::new(1, "secret").timeout(Duration::from_millis(200));
        assert_eq!(builder.timeout, Some(Duration::from_millis(200)));
        assert!(builder.network.timeout_secs.is_none());
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = ClientBuilder::new(1, "secret")
            .timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let client = ClientBuilder::new(77, "very-secret")
            .user_agent("custom/1.0")
            .build()
            .unwrap();
        let debug = format!("{:?}", client.config());
        assert!(debug.contains("77"));
        assert!(debug.contains("custom/1.0"));
        assert!(!debug.contains("very-secret"));
    }
}
