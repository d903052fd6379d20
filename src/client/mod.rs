//! OpenTok REST API client
//!
//! Every operation builds one [`HttpRequest`], runs it through the request
//! filters, executes it on the transport and interprets the status code with
//! the endpoint's [`ResponsePolicy`]. Successful bodies are returned verbatim.

pub mod builder;
pub mod response;

pub use builder::{ClientBuilder, ClientConfig};
pub use response::{ResponsePolicy, common_reason, failure_message};

use crate::config::Settings;
use crate::transport::{HttpRequest, HttpTransport, Method, RequestFilter};
use crate::types::{ArchiveProperties, FormParams, StartArchiveBody};
use crate::{Error, Result};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Offset used when listing archives without paging
pub const DEFAULT_ARCHIVE_OFFSET: u32 = 0;
/// Page size used when listing archives without paging
pub const DEFAULT_ARCHIVE_COUNT: u32 = 1000;

/// Query parameters for listing archives
///
/// Each value is only sent when it differs from its default, so an explicit
/// count of 1000 is indistinguishable from no count at all.
pub fn archive_list_query(offset: u32, count: u32) -> Vec<(String, String)> {
    let mut query = Vec::new();
    if offset != DEFAULT_ARCHIVE_OFFSET {
        query.push(("offset".to_string(), offset.to_string()));
    }
    if count != DEFAULT_ARCHIVE_COUNT {
        query.push(("count".to_string(), count.to_string()));
    }
    query
}

/// Client for session and archive operations
#[derive(Clone)]
pub struct OpenTokClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
    filters: Arc<[Arc<dyn RequestFilter>]>,
}

impl fmt::Debug for OpenTokClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenTokClient")
            .field("config", &self.config)
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl OpenTokClient {
    /// Start building a client for the given account
    pub fn builder(api_key: u64, api_secret: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key, api_secret)
    }

    /// Build a client from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let (api_key, api_secret) = settings.require_credentials()?;
        ClientBuilder::new(api_key, api_secret)
            .api_url(settings.api.api_url.clone())
            .network(settings.network.clone())
            .build()
    }

    pub(crate) fn from_parts(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        filters: Vec<Arc<dyn RequestFilter>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            filters: filters.into(),
        }
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn archive_url(&self) -> String {
        format!(
            "{}/v2/partner/{}/archive",
            self.config.api_url, self.config.api_key
        )
    }

    /// Create a session; `params` are sent as a form body
    pub async fn create_session(&self, params: &FormParams) -> Result<String> {
        let policy = ResponsePolicy::new(200, "Could not create an OpenTok Session.");
        let request = HttpRequest::new(
            Method::Post,
            format!("{}/session/create", self.config.api_url),
        )
        .with_form(params.clone());

        self.request(request, &policy, policy.message()).await
    }

    /// Fetch a single archive
    pub async fn get_archive(&self, archive_id: &str) -> Result<String> {
        let policy = ResponsePolicy::new(200, "Could not get an OpenTok Archive.").on(
            400,
            format!(" The archiveId was invalid. archiveId: {}", archive_id),
        );
        let request = HttpRequest::new(
            Method::Get,
            format!("{}/{}", self.archive_url(), archive_id),
        );

        self.request(request, &policy, policy.message()).await
    }

    /// List archives; pass (0, 1000) for the server defaults
    pub async fn get_archives(&self, offset: u32, count: u32) -> Result<String> {
        let policy = ResponsePolicy::new(200, "Could not get OpenTok Archives.");
        let mut request = HttpRequest::new(Method::Get, self.archive_url());
        for (key, value) in archive_list_query(offset, count) {
            request = request.with_query(key, value);
        }

        self.request(request, &policy, policy.message()).await
    }

    /// List archives with the default offset and count
    pub async fn list_archives(&self) -> Result<String> {
        self.get_archives(DEFAULT_ARCHIVE_OFFSET, DEFAULT_ARCHIVE_COUNT)
            .await
    }

    /// Start recording a session
    pub async fn start_archive(
        &self,
        session_id: &str,
        properties: &ArchiveProperties,
    ) -> Result<String> {
        let body = serde_json::to_string(&StartArchiveBody::new(session_id, properties))
            .map_err(|e| {
                Error::encoding(
                    "Could not start an OpenTok Archive. The JSON body encoding failed.",
                    e,
                )
            })?;

        let policy = ResponsePolicy::new(200, "Could not start an OpenTok Archive.")
            .on(
                404,
                format!(" The sessionId does not exist. sessionId = {}", session_id),
            )
            .on(
                409,
                format!(
                    " The session is either peer-to-peer or already recording. sessionId = {}",
                    session_id
                ),
            );
        let request = HttpRequest::new(Method::Post, self.archive_url()).with_json(body);

        self.request(request, &policy, policy.message()).await
    }

    /// Stop a running archive
    pub async fn stop_archive(&self, archive_id: &str) -> Result<String> {
        let policy = ResponsePolicy::new(200, "Could not stop an OpenTok Archive.")
            .on(
                404,
                format!(" The archiveId does not exist. archiveId = {}", archive_id),
            )
            .on(
                409,
                format!(" The archive is not being recorded. archiveId = {}", archive_id),
            );
        let request = HttpRequest::new(
            Method::Post,
            format!("{}/{}/stop", self.archive_url(), archive_id),
        );

        self.request(request, &policy, policy.message()).await
    }

    /// Delete an archive; the server answers 204 with an empty body
    pub async fn delete_archive(&self, archive_id: &str) -> Result<String> {
        let policy = ResponsePolicy::new(204, "Could not delete an OpenTok Archive.").on(
            409,
            format!(
                " The status was not \"uploaded\", \"available\", or \"deleted\". archiveId = {}",
                archive_id
            ),
        );
        let request = HttpRequest::new(
            Method::Delete,
            format!("{}/{}", self.archive_url(), archive_id),
        );
        let failure = format!(
            "Could not delete an OpenTok Archive. archiveId = {}",
            archive_id
        );

        self.request(request, &policy, &failure).await
    }

    /// Filter, execute and interpret one request
    ///
    /// `failure` is the message used when no response was obtained.
    async fn request(
        &self,
        mut request: HttpRequest,
        policy: &ResponsePolicy,
        failure: &str,
    ) -> Result<String> {
        for filter in self.filters.iter() {
            request = filter
                .filter(request)
                .map_err(|e| Error::request_failed(failure, e))?;
        }

        debug!("Sending {} {}", request.method, request.full_url());

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| Error::request_failed(failure, e))?;

        debug!(
            "Received status {} (expected {})",
            response.status,
            policy.success()
        );

        policy.interpret(response)
    }
}
