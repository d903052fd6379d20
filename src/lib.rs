//! OpenTok REST API client
//!
//! An async client for the OpenTok video platform covering session creation
//! and the archive lifecycle: start, stop, fetch, list and delete.
//!
//! # Architecture
//!
//! - [`OpenTokClient`] builds one HTTP request per operation and maps the
//!   response status to either the raw body or an [`Error::Request`]
//! - [`transport::HttpTransport`] executes requests; [`transport::ReqwestTransport`]
//!   is the default and any other engine or test double can be plugged in
//! - [`transport::RequestFilter`]s rewrite every outgoing request, which is how
//!   the `X-TB-PARTNER-AUTH` header is attached
//!
//! Response bodies are returned verbatim as JSON strings; parsing them is up
//! to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use opentok_client::{ArchiveProperties, OpenTokClient, OutputMode};
//!
//! # async fn example() -> opentok_client::Result<()> {
//! let client = OpenTokClient::builder(123456, "secret").build()?;
//!
//! let properties = ArchiveProperties::new()
//!     .with_name("weekly sync")
//!     .with_output_mode(OutputMode::Individual);
//! let archive_json = client.start_archive("SESSION_ID", &properties).await?;
//! println!("{}", archive_json);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;
pub mod utils;

pub use client::{ClientBuilder, ClientConfig, OpenTokClient};
pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use types::{ArchiveMode, ArchiveProperties, FormParams, MediaMode, OutputMode, SessionProperties};
