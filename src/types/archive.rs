//! Archive type definitions
//!
//! Defines the caller supplied properties for starting an archive and the
//! JSON body sent to the archive endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the streams of a session are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// All streams mixed into a single file
    #[default]
    Composed,
    /// One file per stream
    Individual,
}

impl OutputMode {
    /// Wire representation of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Composed => "composed",
            OutputMode::Individual => "individual",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "composed" => Ok(OutputMode::Composed),
            "individual" => Ok(OutputMode::Individual),
            other => Err(crate::Error::config(
                "output_mode",
                &format!("Unknown output mode: {}", other),
            )),
        }
    }
}

/// Properties for a new archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveProperties {
    /// Record video tracks
    pub has_video: bool,
    /// Record audio tracks
    pub has_audio: bool,
    /// Composed or individual output
    pub output_mode: OutputMode,
    /// Optional archive name
    pub name: Option<String>,
}

impl Default for ArchiveProperties {
    fn default() -> Self {
        Self {
            has_video: true,
            has_audio: true,
            output_mode: OutputMode::Composed,
            name: None,
        }
    }
}

impl ArchiveProperties {
    /// Create archive properties with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set archive name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enable or disable video
    pub fn with_video(mut self, has_video: bool) -> Self {
        self.has_video = has_video;
        self
    }

    /// Enable or disable audio
    pub fn with_audio(mut self, has_audio: bool) -> Self {
        self.has_audio = has_audio;
        self
    }

    /// Set output mode
    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }
}

/// JSON body of the start-archive call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartArchiveBody<'a> {
    pub session_id: &'a str,
    pub has_video: bool,
    pub has_audio: bool,
    pub output_mode: OutputMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

impl<'a> StartArchiveBody<'a> {
    /// Build the body for a session and its archive properties
    pub fn new(session_id: &'a str, properties: &'a ArchiveProperties) -> Self {
        Self {
            session_id,
            has_video: properties.has_video,
            has_audio: properties.has_audio,
            output_mode: properties.output_mode,
            name: properties.name.as_deref(),
        }
    }
}
