//! # tintlog types
//!
//! Types shared by the tintlog crates:
//!
//! - [`Severity`] with its fixed tag strings
//! - [`OutputFlags`] selecting the per-line header
//! - [`LoggerConfig`] and [`StreamTarget`] for file/env configuration
//! - [`TintError`] and the [`Result`] alias
//!
//! ## Example
//!
//! ```
//! use tintlog_types::{OutputFlags, Severity};
//!
//! assert_eq!(Severity::Warning.tag(), "[WARNING] ");
//! let flags: OutputFlags = "date,time".parse().unwrap();
//! assert_eq!(flags, OutputFlags::STANDARD);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod flags;
pub mod config;

// Re-export common types for convenience
pub use errors::{Result, TintError};
pub use enums::Severity;
pub use flags::OutputFlags;
pub use config::{LoggerConfig, StreamTarget};
