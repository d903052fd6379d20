//! Session creation properties

use crate::types::FormParams;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// How media streams flow between clients of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaMode {
    /// Streams go through the media router; required for archiving
    #[default]
    Routed,
    /// Clients send streams directly to each other when possible
    Relayed,
}

impl MediaMode {
    /// Value of the `p2p.preference` form parameter
    pub fn p2p_preference(&self) -> &'static str {
        match self {
            MediaMode::Routed => "disabled",
            MediaMode::Relayed => "enabled",
        }
    }
}

/// Whether sessions are archived automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveMode {
    /// Archives are started explicitly
    #[default]
    Manual,
    /// An archive starts when the first client publishes
    Always,
}

impl ArchiveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveMode::Manual => "manual",
            ArchiveMode::Always => "always",
        }
    }
}

/// Options for a new session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProperties {
    /// Location hint used to pick the media server
    pub location: Option<IpAddr>,
    /// Media routing mode
    pub media_mode: MediaMode,
    /// Automatic archiving mode
    pub archive_mode: ArchiveMode,
}

impl SessionProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set location hint
    pub fn with_location(mut self, location: IpAddr) -> Self {
        self.location = Some(location);
        self
    }

    /// Set media mode
    pub fn with_media_mode(mut self, media_mode: MediaMode) -> Self {
        self.media_mode = media_mode;
        self
    }

    /// Set archive mode
    pub fn with_archive_mode(mut self, archive_mode: ArchiveMode) -> Self {
        self.archive_mode = archive_mode;
        self
    }

    /// Check that the combination is accepted by the server
    pub fn validate(&self) -> crate::Result<()> {
        if self.archive_mode == ArchiveMode::Always && self.media_mode != MediaMode::Routed {
            return Err(crate::Error::config(
                "archive_mode",
                "A session with always archive mode must also have the routed media mode",
            ));
        }
        Ok(())
    }

    /// Convert into the form parameters of the create-session call
    pub fn to_params(&self) -> crate::Result<FormParams> {
        self.validate()?;

        let mut params = FormParams::new();
        if let Some(location) = self.location {
            params.append("location", location.to_string());
        }
        params.append("p2p.preference", self.media_mode.p2p_preference());
        params.append("archiveMode", self.archive_mode.as_str());
        Ok(params)
    }
}
