//! Error types for the OpenTok client
//!
//! Every remote failure surfaces as [`Error::Request`]. The other variants
//! cover local concerns: body encoding, configuration and transport plumbing.

use thiserror::Error;

/// Boxed error used as the cause of a failed request
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// A call to the remote API failed
    ///
    /// Raised for non-success status codes and for failures while the
    /// request was in flight (connection errors, body read errors).
    #[error("{message}")]
    Request {
        /// Endpoint specific, human readable message
        message: String,
        /// Status code of the response, when one was received
        status: Option<u16>,
        /// Underlying cause, when the failure was not a status code
        #[source]
        source: Option<BoxError>,
    },

    /// Building the JSON request body failed
    #[error("{message}")]
    Encoding {
        /// Endpoint specific message
        message: String,
        /// Serializer error
        #[source]
        source: serde_json::Error,
    },

    /// Transport level failure raised by an [`HttpTransport`](crate::transport::HttpTransport)
    /// or a [`RequestFilter`](crate::transport::RequestFilter)
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// HTTP errors from the reqwest transport
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration file parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration file read errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a request error for a non-success status code
    pub fn status<S: Into<String>>(message: S, status: u16) -> Self {
        Self::Request {
            message: message.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Create a request error wrapping the cause that interrupted the call
    pub fn request_failed<S, E>(message: S, cause: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxError>,
    {
        Self::Request {
            message: message.into(),
            status: None,
            source: Some(cause.into()),
        }
    }

    /// Create a body encoding error
    pub fn encoding<S: Into<String>>(message: S, source: serde_json::Error) -> Self {
        Self::Encoding {
            message: message.into(),
            source,
        }
    }

    /// Create a transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Status code of the failed response, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => *status,
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Request { status: Some(_), .. } => "response",
            Error::Request { status: None, .. } => "request",
            Error::Encoding { .. } => "encoding",
            Error::Transport { .. } => "transport",
            Error::Http(..) => "http",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
            Error::Config { .. } => "config",
        }
    }
}
