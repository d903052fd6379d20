//! Status code interpretation
//!
//! A [`ResponsePolicy`] describes one endpoint: the status code that means
//! success, the base failure message and endpoint specific reasons for
//! particular status codes. Everything else falls back to the shared table.

use crate::transport::HttpResponse;
use crate::{Error, Result};

/// Reason appended for status codes every endpoint shares
pub fn common_reason(status: u16) -> Option<&'static str> {
    match status {
        400 => Some(" The request was invalid."),
        403 => Some(" The request was not authorized."),
        500 => Some(" A server error occurred."),
        _ => None,
    }
}

/// Compose the failure message for `status`
///
/// Endpoint overrides win over the common table; unknown codes produce a
/// message carrying the literal code.
pub fn failure_message(status: u16, message: &str, overrides: &[(u16, String)]) -> String {
    if let Some((_, reason)) = overrides.iter().find(|(code, _)| *code == status) {
        return format!("{}{}", message, reason);
    }

    match common_reason(status) {
        Some(reason) => format!("{}{}", message, reason),
        None => format!(
            "{} The server response was invalid. response code: {}",
            message, status
        ),
    }
}

/// Per-endpoint response handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePolicy {
    success: u16,
    message: String,
    overrides: Vec<(u16, String)>,
}

impl ResponsePolicy {
    /// Policy with the given success code and base failure message
    pub fn new(success: u16, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            overrides: Vec::new(),
        }
    }

    /// Add an endpoint specific reason for `status`
    pub fn on(mut self, status: u16, reason: impl Into<String>) -> Self {
        self.overrides.push((status, reason.into()));
        self
    }

    pub fn success(&self) -> u16 {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Return the body on success, the composed failure otherwise
    pub fn interpret(&self, response: HttpResponse) -> Result<String> {
        if response.status == self.success {
            return Ok(response.body);
        }

        Err(Error::status(
            failure_message(response.status, &self.message, &self.overrides),
            response.status,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(400, "Base. The request was invalid.")]
    #[case(403, "Base. The request was not authorized.")]
    #[case(500, "Base. A server error occurred.")]
    #[case(418, "Base. The server response was invalid. response code: 418")]
    #[case(502, "Base. The server response was invalid. response code: 502")]
    fn test_common_messages(#[case] status: u16, #[case] expected: &str) {
        assert_eq!(failure_message(status, "Base.", &[]), expected);
    }

    #[test]
    fn test_override_wins_over_common_table() {
        let overrides = vec![(400, " The archiveId was invalid. archiveId: abc".to_string())];
        assert_eq!(
            failure_message(400, "Could not get an OpenTok Archive.", &overrides),
            "Could not get an OpenTok Archive. The archiveId was invalid. archiveId: abc"
        );
        assert_eq!(
            failure_message(403, "Could not get an OpenTok Archive.", &overrides),
            "Could not get an OpenTok Archive. The request was not authorized."
        );
    }

    #[test]
    fn test_interpret_success_returns_body_verbatim() {
        let policy = ResponsePolicy::new(200, "Base.");
        let body = r#"{"id":"x", "status" : "started"}"#;
        assert_eq!(policy.interpret(HttpResponse::new(200, body)).unwrap(), body);
    }

    #[test]
    fn test_interpret_other_2xx_is_failure() {
        let policy = ResponsePolicy::new(204, "Could not delete an OpenTok Archive.");
        let err = policy.interpret(HttpResponse::new(200, "")).unwrap_err();
        assert_eq!(err.status_code(), Some(200));
        assert!(err.to_string().contains("response code: 200"));
    }

    #[test]
    fn test_interpret_uses_overrides() {
        let policy = ResponsePolicy::new(200, "Could not stop an OpenTok Archive.")
            .on(409, " The archive is not being recorded. archiveId = a1");
        let err = policy.interpret(HttpResponse::new(409, "{}")).unwrap_err();

        assert!(matches!(err, Error::Request { status: Some(409), .. }));
        assert_eq!(
            err.to_string(),
            "Could not stop an OpenTok Archive. The archive is not being recorded. archiveId = a1"
        );
    }
}
