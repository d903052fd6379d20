//! reqwest-backed transport
//!
//! Handles HTTP client configuration (user agent, optional timeout and
//! proxy) and executes requests built by the API client.

use crate::Result;
use crate::config::settings::NetworkSettings;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method, RequestBody};
use reqwest::{Client, Proxy};
use std::time::Duration;
use tracing::debug;

/// Default transport built on a shared [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// Base HTTP client; owns the connection pool
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport from network settings
    pub fn new(network: &NetworkSettings) -> Result<Self> {
        Self::configured(network, network.timeout())
    }

    /// Create a transport with an explicit timeout, ignoring `timeout_secs`
    pub fn configured(network: &NetworkSettings, timeout: Option<Duration>) -> Result<Self> {
        let mut client_builder = Client::builder().user_agent(network.user_agent.clone());

        if let Some(timeout) = timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(proxy_url) = &network.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                crate::Error::config("proxy", &format!("Invalid proxy URL '{}': {}", proxy_url, e))
            })?;
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder.build().map_err(|e| {
            crate::Error::transport(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        builder = match &request.body {
            Some(RequestBody::Form(params)) => builder.body(params.encode()),
            Some(RequestBody::Json(json)) => builder.body(json.clone()),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            status,
            body.len()
        );

        Ok(HttpResponse { status, body })
    }
}
