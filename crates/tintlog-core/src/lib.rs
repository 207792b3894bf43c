//! # tintlog
//!
//! Leveled, colorized console logging with an optional mirrored log file.
//!
//! This crate provides:
//!
//! - **Writer**: [`LogWriter`], formatting `<header><prefix><tag><message>` lines
//! - **Streams**: standard error/output, in-memory capture, or any writer
//! - **File mirror**: raw, header-less append of every line to a log file
//! - **Configuration**: YAML file plus `TINTLOG_*` environment overrides
//! - **Default writer**: process-wide instance with free functions and macros
//! - **Tracing**: a `tracing-subscriber` layer feeding events into a writer
//!
//! ## Example
//!
//! ```no_run
//! use tintlog_core::{global, info, OutputFlags};
//!
//! global::set_prefix("worker-1 ");
//! global::set_flags(OutputFlags::STANDARD);
//! global::set_log_file("/tmp/worker-1.log");
//!
//! info!("started with {} jobs", 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod file;
pub mod global;
pub mod layer;
pub mod macros;
pub mod stream;
pub mod term;
pub mod time;
pub mod writer;

// Re-export commonly used items
pub use layer::TintLayer;
pub use stream::{MemoryBuffer, OutputStream, SharedWriter};
pub use time::Origin;
pub use writer::{LogWriter, FATAL_EXIT_CODE};
pub use tintlog_types::{LoggerConfig, OutputFlags, Result, Severity, StreamTarget, TintError};

/// tintlog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
