//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use crate::errors::{Result, TintError};
use crate::flags::OutputFlags;

/// Standard stream a logger writes console lines to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamTarget {
    /// Standard error (default)
    #[default]
    Stderr,
    /// Standard output
    Stdout,
}

impl FromStr for StreamTarget {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "stderr" => Ok(StreamTarget::Stderr),
            "stdout" => Ok(StreamTarget::Stdout),
            _ => Err(TintError::Validation(format!("Invalid stream: {}", s))),
        }
    }
}

impl fmt::Display for StreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamTarget::Stderr => write!(f, "stderr"),
            StreamTarget::Stdout => write!(f, "stdout"),
        }
    }
}

/// Logger configuration.
///
/// Every field is optional in a config file; missing fields take the
/// defaults of a freshly created logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Custom prefix written before the severity tag
    pub prefix: String,
    /// Header flags (`msg_prefix` is always added by the writer)
    pub flags: OutputFlags,
    /// Console stream
    pub stream: StreamTarget,
    /// Mirror file; absent disables file logging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Whether ANSI colors are applied
    pub color: bool,
    /// Whether ANSI escapes are stripped from the file copy
    pub plain_file: bool,
}

impl LoggerConfig {
    /// Set the file, treating an empty path as "no file".
    pub fn set_file(&mut self, file: impl Into<PathBuf>) {
        let file = file.into();
        self.file = if file.as_os_str().is_empty() {
            None
        } else {
            Some(file)
        };
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            flags: OutputFlags::MSG_PREFIX | OutputFlags::TIME,
            stream: StreamTarget::Stderr,
            file: None,
            color: true,
            plain_file: false,
        }
    }
}
