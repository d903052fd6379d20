//! Type definitions for the OpenTok client
//!
//! This module contains the value objects passed to the client operations.

pub mod archive;
pub mod params;
pub mod session;

pub use archive::{ArchiveProperties, OutputMode, StartArchiveBody};
pub use params::{FormParams, encode_pairs};
pub use session::{ArchiveMode, MediaMode, SessionProperties};
