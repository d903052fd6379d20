//! Configuration management for the OpenTok client
//!
//! This module handles loading credentials, endpoint and transport settings
//! for library users and the CLI.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;

// Static mutex to ensure environment variable tests don't interfere with each other
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
