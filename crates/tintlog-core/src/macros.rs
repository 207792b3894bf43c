//! Formatting macros.
//!
//! `tlog!` and the per-severity macros write through the process-wide
//! default writer; `tlog_to!` writes through an explicit [`LogWriter`].
//!
//! [`LogWriter`]: crate::LogWriter

/// Log a formatted message at the given severity through the default writer.
///
/// ```no_run
/// use tintlog_core::{tlog, Severity};
///
/// tlog!(Severity::Warning, "{} retries left", 3);
/// ```
#[macro_export]
macro_rules! tlog {
    ($severity:expr, $($arg:tt)+) => {
        $crate::global::log_fmt($severity, ::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at the given severity through `writer`.
///
/// ```
/// use tintlog_core::{tlog_to, LogWriter, MemoryBuffer, OutputFlags, Severity};
///
/// let buffer = MemoryBuffer::new();
/// let log = LogWriter::new().with_stream(buffer.clone()).with_flags(OutputFlags::empty()).with_color(false);
/// tlog_to!(log, Severity::Info, "{}/{}", 1, 2);
/// assert_eq!(buffer.contents(), "[INFO] 1/2\n");
/// ```
#[macro_export]
macro_rules! tlog_to {
    ($writer:expr, $severity:expr, $($arg:tt)+) => {
        $writer.emit_fmt($severity, ::std::format_args!($($arg)+))
    };
}

/// Log at `Info` through the default writer.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::tlog!($crate::Severity::Info, $($arg)+)
    };
}

/// Log at `Warning` through the default writer.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::tlog!($crate::Severity::Warning, $($arg)+)
    };
}

/// Log at `Error` through the default writer.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::tlog!($crate::Severity::Error, $($arg)+)
    };
}

/// Log at `Debug` through the default writer.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::tlog!($crate::Severity::Debug, $($arg)+)
    };
}

/// Log at `Fatal` through the default writer and exit the process.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {{
        $crate::tlog!($crate::Severity::Fatal, $($arg)+);
        unreachable!()
    }};
}
