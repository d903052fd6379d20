//! Version information utilities
//!
//! Provides the crate version and the default user agent derived from it.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the current crate version
pub fn get_version() -> &'static str {
    VERSION
}

/// Default user agent sent with every request
pub fn user_agent() -> String {
    format!("opentok-rust-sdk/{}", VERSION)
}
