//! Error types for tintlog operations.

use thiserror::Error;

/// The main error type for tintlog.
///
/// Logging calls never fail from the caller's point of view; these errors
/// come from loading configuration and parsing user-supplied names.
#[derive(Error, Debug)]
pub enum TintError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error (unknown severity, unknown flag name, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A specialized Result type for tintlog operations.
pub type Result<T> = std::result::Result<T, TintError>;

/// Return early with a [`TintError`].
///
/// # Example
///
/// ```ignore
/// if name.is_empty() {
///     bail!(Validation, "empty flag name");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::TintError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::TintError::$variant(format!($fmt, $($arg)*)))
    };
}
