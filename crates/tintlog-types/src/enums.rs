//! Severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{Result, TintError};

/// Severity of a log line.
///
/// Every severity is always emitted; there is no ordering or filtering
/// between them. `Fatal` terminates the process after the line is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational messages
    #[default]
    Info,
    /// Error messages
    Error,
    /// Warnings
    Warning,
    /// Debug messages
    Debug,
    /// Unrecoverable errors; the process exits after logging
    Fatal,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Error,
        Severity::Warning,
        Severity::Debug,
        Severity::Fatal,
    ];

    /// The bracketed tag written in front of the message, trailing space included.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Info => "[INFO] ",
            Severity::Error => "[ERROR] ",
            Severity::Warning => "[WARNING] ",
            Severity::Debug => "[DEBUG] ",
            Severity::Fatal => "[FATAL] ",
        }
    }

    /// Whether logging at this severity terminates the process.
    pub fn is_fatal(self) -> bool {
        matches!(self, Severity::Fatal)
    }
}

impl FromStr for Severity {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "DEBUG" => Ok(Severity::Debug),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(TintError::Validation(format!("Invalid severity: {}", s))),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Debug => write!(f, "DEBUG"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tags_are_exact() {
        assert_eq!(Severity::Error.tag(), "[ERROR] ");
        assert_eq!(Severity::Warning.tag(), "[WARNING] ");
        assert_eq!(Severity::Debug.tag(), "[DEBUG] ");
        assert_eq!(Severity::Fatal.tag(), "[FATAL] ");
        assert_eq!(Severity::Info.tag(), "[INFO] ");
    }

    #[test]
    fn test_only_fatal_is_fatal() {
        let fatal: Vec<_> = Severity::ALL.iter().filter(|s| s.is_fatal()).collect();
        assert_eq!(fatal, vec![&Severity::Fatal]);
    }

    #[test]
    fn test_parse_accepts_warn_alias() {
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(" Debug ".parse::<Severity>().unwrap(), Severity::Debug);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_tag_contains_display_name() {
        for severity in Severity::ALL {
            assert_eq!(severity.tag(), format!("[{}] ", severity));
        }
    }

    proptest! {
        #[test]
        fn display_parses_back(idx in 0usize..5) {
            let severity = Severity::ALL[idx];
            prop_assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
            prop_assert_eq!(severity.to_string().to_lowercase().parse::<Severity>().unwrap(), severity);
        }
    }
}
