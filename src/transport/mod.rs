//! HTTP transport abstraction
//!
//! The client builds an [`HttpRequest`] per call, runs it through its
//! [`RequestFilter`]s and hands it to an [`HttpTransport`]. Swapping the HTTP
//! engine (or mocking it in tests) only needs a new transport implementation.

pub mod filter;
pub mod http;

pub use filter::{PARTNER_AUTH_HEADER, PartnerAuthFilter, RequestFilter, UserAgentFilter};
pub use http::ReqwestTransport;

use crate::Result;
use crate::types::{FormParams, encode_pairs};
use std::fmt;

/// HTTP methods used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded` parameters
    Form(FormParams),
    /// Pre-encoded JSON document
    Json(String),
}

impl RequestBody {
    /// Encoded body bytes as sent on the wire
    pub fn encode(&self) -> String {
        match self {
            RequestBody::Form(params) => params.encode(),
            RequestBody::Json(json) => json.clone(),
        }
    }
}

/// Outgoing HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL without query string
    pub url: String,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Query parameters in wire order
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Create a request without headers, query or body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Set a header, replacing any existing value with the same name
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
    }

    /// Builder style [`set_header`](Self::set_header)
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set a form body
    pub fn with_form(self, params: FormParams) -> Self {
        let mut request =
            self.with_header("Content-Type", "application/x-www-form-urlencoded");
        request.body = Some(RequestBody::Form(params));
        request
    }

    /// Set a JSON body
    pub fn with_json(self, json: impl Into<String>) -> Self {
        let mut request = self.with_header("Content-Type", "application/json");
        request.body = Some(RequestBody::Json(json.into()));
        request
    }

    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Encoded query string, empty when there are no parameters
    pub fn query_string(&self) -> String {
        encode_pairs(&self.query)
    }

    /// URL including the query string
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            self.url.clone()
        } else {
            format!("{}?{}", self.url, self.query_string())
        }
    }
}

/// Response as seen by the client: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Something that can execute an [`HttpRequest`]
///
/// Implementations return `Err` only when no response was obtained; every
/// status code, including errors, is a successful execution.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and wait for the full response
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}
