//! Process-wide default writer.
//!
//! Libraries and small programs that do not want to pass a [`LogWriter`]
//! around can use these functions and the crate's macros, which all target
//! one lazily created writer with default settings.

use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use tintlog_types::{LoggerConfig, OutputFlags, Severity};

use crate::stream::OutputStream;
use crate::writer::LogWriter;

static DEFAULT: Lazy<LogWriter> = Lazy::new(LogWriter::new);

/// The default writer.
pub fn global() -> &'static LogWriter {
    &DEFAULT
}

/// Reconfigure the default writer.
pub fn configure(config: &LoggerConfig) {
    DEFAULT.apply_config(config);
}

/// Write `message` at `severity` through the default writer.
#[track_caller]
pub fn log(severity: Severity, message: impl AsRef<str>) {
    DEFAULT.emit(severity, message);
}

/// Write a formatted message through the default writer.
#[track_caller]
pub fn log_fmt(severity: Severity, args: fmt::Arguments<'_>) {
    DEFAULT.emit_fmt(severity, args);
}

/// Write `context` and an error chain through the default writer.
#[track_caller]
pub fn log_error(severity: Severity, context: &str, error: &dyn Error) {
    DEFAULT.emit_error(severity, context, error);
}

/// Write a bare newline through the default writer.
pub fn blank_line() {
    DEFAULT.blank_line();
}

/// See [`LogWriter::set_flags`].
pub fn set_flags(flags: OutputFlags) {
    DEFAULT.set_flags(flags);
}

/// See [`LogWriter::flags`].
pub fn flags() -> OutputFlags {
    DEFAULT.flags()
}

/// See [`LogWriter::set_stream`].
pub fn set_stream(stream: impl Into<OutputStream>) {
    DEFAULT.set_stream(stream);
}

/// See [`LogWriter::stream`].
pub fn stream() -> OutputStream {
    DEFAULT.stream()
}

/// See [`LogWriter::set_log_file`].
pub fn set_log_file(path: impl AsRef<Path>) {
    DEFAULT.set_log_file(path);
}

/// See [`LogWriter::disable_log_file`].
pub fn disable_log_file() {
    DEFAULT.disable_log_file();
}

/// See [`LogWriter::log_file`].
pub fn log_file() -> Option<PathBuf> {
    DEFAULT.log_file()
}

/// See [`LogWriter::set_prefix`].
pub fn set_prefix(prefix: impl Into<String>) {
    DEFAULT.set_prefix(prefix);
}

/// See [`LogWriter::prefix`].
pub fn prefix() -> String {
    DEFAULT.prefix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::MemoryBuffer;

    // The only test touching the shared writer; others use their own instances.
    #[test]
    fn test_default_writer_operations() {
        assert!(matches!(stream(), OutputStream::Stderr));
        assert_eq!(flags(), OutputFlags::MSG_PREFIX | OutputFlags::TIME);

        let buffer = MemoryBuffer::new();
        let mut config = LoggerConfig::default();
        config.color = false;
        configure(&config);
        set_stream(buffer.clone());
        set_flags(OutputFlags::empty());
        set_prefix("g ");
        assert_eq!(prefix(), "g ");

        log(Severity::Info, "plain");
        log_fmt(Severity::Debug, format_args!("{}+{}", 1, 2));
        blank_line();
        crate::tlog!(Severity::Error, "via {}", "macro");
        crate::warning!("w{}", 1);
        crate::info!("done");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("global.log");
        set_log_file(&path);
        assert_eq!(log_file(), Some(path.clone()));
        crate::debug!("mirrored");
        disable_log_file();
        assert_eq!(log_file(), None);
        log_error(
            Severity::Error,
            "io",
            &std::io::Error::new(std::io::ErrorKind::Other, "oops"),
        );

        assert_eq!(
            buffer.contents(),
            "g [INFO] plain\n\
             g [DEBUG] 1+2\n\
             \n\
             g [ERROR] via macro\n\
             g [WARNING] w1\n\
             g [INFO] done\n\
             g [DEBUG] mirrored\n\
             g [ERROR] io: oops\n"
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "g [DEBUG] mirrored");

        configure(&LoggerConfig::default());
    }
}
