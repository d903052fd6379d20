//! Subcommand execution
//!
//! Each command maps onto one client operation. The raw response body is
//! printed on stdout; failures are printed as a JSON document on stderr.

use crate::cli::{GlobalArgs, init_logging, load_settings};
use crate::error::{format_error_for_cli, format_error_for_logging};
use crate::types::{ArchiveProperties, FormParams, SessionProperties};
use crate::{OpenTokClient, Result};
use tracing::{debug, info};

/// A single API operation requested on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateSession {
        properties: SessionProperties,
        /// Extra raw `key=value` form parameters
        params: Vec<(String, String)>,
    },
    GetArchive {
        archive_id: String,
    },
    ListArchives {
        offset: u32,
        count: u32,
    },
    StartArchive {
        session_id: String,
        properties: ArchiveProperties,
    },
    StopArchive {
        archive_id: String,
    },
    DeleteArchive {
        archive_id: String,
    },
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateSession { .. } => "create-session",
            Command::GetArchive { .. } => "get-archive",
            Command::ListArchives { .. } => "list-archives",
            Command::StartArchive { .. } => "start-archive",
            Command::StopArchive { .. } => "stop-archive",
            Command::DeleteArchive { .. } => "delete-archive",
        }
    }
}

/// Parse a `key=value` argument
pub fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

/// Execute a command against the client and return the response body
pub async fn execute(client: &OpenTokClient, command: &Command) -> Result<String> {
    match command {
        Command::CreateSession { properties, params } => {
            let mut form: FormParams = properties.to_params()?;
            for (key, value) in params {
                form.append(key.clone(), value.clone());
            }
            client.create_session(&form).await
        }
        Command::GetArchive { archive_id } => client.get_archive(archive_id).await,
        Command::ListArchives { offset, count } => client.get_archives(*offset, *count).await,
        Command::StartArchive {
            session_id,
            properties,
        } => client.start_archive(session_id, properties).await,
        Command::StopArchive { archive_id } => client.stop_archive(archive_id).await,
        Command::DeleteArchive { archive_id } => client.delete_archive(archive_id).await,
    }
}

/// Load settings, build the client and run `command`
///
/// Exits the process with code 1 when the operation fails.
pub async fn run_command(args: GlobalArgs, command: Command) -> anyhow::Result<()> {
    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", serde_json::to_string(&format_error_for_cli(&e))?);
            std::process::exit(1);
        }
    };

    init_logging(&settings, args.verbose);
    debug!("Running {} against {}", command.name(), settings.api.api_url);

    let result = match OpenTokClient::from_settings(&settings) {
        Ok(client) => execute(&client, &command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(body) => {
            info!("{} succeeded", command.name());
            if !body.is_empty() {
                println!("{}", body);
            }
            Ok(())
        }
        Err(e) => {
            debug!(error = %format_error_for_logging(&e), "{} failed", command.name());
            eprintln!("{}", serde_json::to_string(&format_error_for_cli(&e))?);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
    use std::sync::{Arc, Mutex};

    struct RecordingTransport {
        requests: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait::async_trait]
    impl HttpTransport for RecordingTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request);
            Ok(HttpResponse::new(200, r#"[{"session_id":"S1"}]"#))
        }
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("location=10.0.0.1").unwrap(),
            ("location".to_string(), "10.0.0.1".to_string())
        );
        assert_eq!(
            parse_key_value("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[tokio::test]
    async fn test_create_session_merges_raw_params() {
        let transport = Arc::new(RecordingTransport {
            requests: Mutex::new(Vec::new()),
        });
        let client = OpenTokClient::builder(1, "s")
            .shared_transport(transport.clone())
            .build()
            .unwrap();

        let command = Command::CreateSession {
            properties: SessionProperties::new(),
            params: vec![("custom".to_string(), "1".to_string())],
        };
        let body = execute(&client, &command).await.unwrap();
        assert_eq!(body, r#"[{"session_id":"S1"}]"#);

        let requests = transport.requests.lock().unwrap();
        let encoded = requests[0].body.as_ref().unwrap().encode();
        assert_eq!(encoded, "p2p.preference=disabled&archiveMode=manual&custom=1");
    }

    #[test]
    fn test_command_names() {
        let command = Command::ListArchives {
            offset: 0,
            count: 1000,
        };
        assert_eq!(command.name(), "list-archives");
    }
}
