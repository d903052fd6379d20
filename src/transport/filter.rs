//! Request filters
//!
//! Filters run on every outgoing request before it reaches the transport.

use crate::Result;
use crate::transport::HttpRequest;
use std::fmt;

/// Header carrying the partner credentials
pub const PARTNER_AUTH_HEADER: &str = "X-TB-PARTNER-AUTH";

/// Hook that may rewrite a request before it is sent
pub trait RequestFilter: Send + Sync {
    fn filter(&self, request: HttpRequest) -> Result<HttpRequest>;
}

/// Attaches `X-TB-PARTNER-AUTH: {key}:{secret}` to every request
#[derive(Clone)]
pub struct PartnerAuthFilter {
    api_key: u64,
    api_secret: String,
}

impl PartnerAuthFilter {
    pub fn new(api_key: u64, api_secret: impl Into<String>) -> Self {
        Self {
            api_key,
            api_secret: api_secret.into(),
        }
    }

    /// Header value for the configured credentials
    pub fn header_value(&self) -> String {
        format!("{}:{}", self.api_key, self.api_secret)
    }
}

// Keep the secret out of debug output
impl fmt::Debug for PartnerAuthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartnerAuthFilter")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl RequestFilter for PartnerAuthFilter {
    fn filter(&self, request: HttpRequest) -> Result<HttpRequest> {
        Ok(request.with_header(PARTNER_AUTH_HEADER, self.header_value()))
    }
}

/// Sets the `User-Agent` header
#[derive(Debug, Clone)]
pub struct UserAgentFilter {
    user_agent: String,
}

impl UserAgentFilter {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl RequestFilter for UserAgentFilter {
    fn filter(&self, request: HttpRequest) -> Result<HttpRequest> {
        Ok(request.with_header("User-Agent", self.user_agent.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;

    #[test]
    fn test_partner_auth_header() {
        let filter = PartnerAuthFilter::new(123456, "secret");
        let request = HttpRequest::new(Method::Get, "http://localhost");

        let filtered = filter.filter(request).unwrap();
        assert_eq!(filtered.header(PARTNER_AUTH_HEADER), Some("123456:secret"));
    }

    #[test]
    fn test_partner_auth_replaces_existing_header() {
        let filter = PartnerAuthFilter::new(1, "s");
        let request = HttpRequest::new(Method::Get, "http://localhost")
            .with_header("x-tb-partner-auth", "forged");

        let filtered = filter.filter(request).unwrap();
        assert_eq!(filtered.headers.len(), 1);
        assert_eq!(filtered.header(PARTNER_AUTH_HEADER), Some("1:s"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let filter = PartnerAuthFilter::new(42, "top-secret");
        let debug = format!("{:?}", filter);
        assert!(debug.contains("42"));
        assert!(!debug.contains("top-secret"));
    }

    #[test]
    fn test_user_agent_filter() {
        let filter = UserAgentFilter::new("opentok-rust-sdk/test");
        let filtered = filter
            .filter(HttpRequest::new(Method::Post, "http://localhost"))
            .unwrap();
        assert_eq!(filtered.header("user-agent"), Some("opentok-rust-sdk/test"));
    }
}
