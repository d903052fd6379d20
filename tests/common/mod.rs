//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use opentok_client::transport::{HttpRequest, HttpResponse, HttpTransport};
use opentok_client::{Error, OpenTokClient, Result};
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

pub const API_KEY: u64 = 123456;
pub const API_SECRET: &str = "1234567890abcdef1234567890abcdef1234567890";

/// What a [`RecordingTransport`] answers with
#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16, String),
    /// Simulates a dropped connection
    Fail(String),
}

/// In-memory transport recording every request it receives
#[derive(Debug)]
pub struct RecordingTransport {
    reply: Reply,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Status(status, body.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait::async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Status(status, body) => Ok(HttpResponse::new(*status, body.clone())),
            Reply::Fail(message) => Err(Error::transport(message.clone())),
        }
    }
}

/// Test helper functions
pub mod helpers {
    use super::*;

    /// Client wired to an in-memory transport
    pub fn client_with(transport: Arc<RecordingTransport>) -> OpenTokClient {
        OpenTokClient::builder(API_KEY, API_SECRET)
            .api_url("https://api.test.opentok.com")
            .shared_transport(transport)
            .build()
            .unwrap()
    }

    /// Client using the reqwest transport against a mock server
    pub fn client_for(server: &MockServer) -> OpenTokClient {
        OpenTokClient::builder(API_KEY, API_SECRET)
            .api_url(server.uri())
            .build()
            .unwrap()
    }

    /// Path prefix of the archive endpoints
    pub fn archive_path() -> String {
        format!("/v2/partner/{}/archive", API_KEY)
    }

    /// Expected partner auth header value
    pub fn auth_header() -> String {
        format!("{}:{}", API_KEY, API_SECRET)
    }
}

/// Test data factory
pub struct MockData;

impl MockData {
    pub fn archive_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "createdAt": 1395187836000u64,
            "duration": 62,
            "id": id,
            "name": "",
            "partnerId": API_KEY,
            "reason": "",
            "sessionId": "SESSIONID",
            "size": 8347554,
            "status": status,
            "hasVideo": true,
            "hasAudio": true,
            "outputMode": "composed",
            "url": null
        })
    }

    pub fn session_json() -> serde_json::Value {
        serde_json::json!([{
            "session_id": "SESSIONID",
            "project_id": API_KEY.to_string(),
            "partner_id": API_KEY.to_string(),
            "create_dt": "Fri Nov 18 15:50:36 PST 2016",
            "media_server_url": ""
        }])
    }
}

/// Test utilities
pub struct TestUtils;

impl TestUtils {
    /// Initialize test logging
    pub fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }
}
