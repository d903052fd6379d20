//! Error formatting utilities
//!
//! Renders errors with their full cause chain for the CLI and for
//! structured logs.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display, appending nested causes
pub fn format_error(error: &Error) -> String {
    let mut result = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let cause_str = cause.to_string();
        if !result.contains(&cause_str) {
            result = format!("{} (caused by {})", result, cause_str);
        }
        source = cause.source();
    }

    result
}

/// Format error as the JSON document the CLI prints on failure
pub fn format_error_for_cli(error: &Error) -> serde_json::Value {
    serde_json::json!({
        "error": format_error(error),
        "category": error.category(),
        "status": error.status_code(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
    });

    match error {
        Error::Request {
            status: Some(code), ..
        } => {
            log_data["status"] = serde_json::Value::Number((*code).into());
        }
        Error::Config { field, .. } => {
            log_data["field"] = serde_json::Value::String(field.clone());
        }
        _ => {}
    }

    log_data
}
