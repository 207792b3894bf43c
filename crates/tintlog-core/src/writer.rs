//! The log writer.
//!
//! A [`LogWriter`] formats each message as
//! `<header><prefix><tag><message>` and writes it to its output stream,
//! optionally mirroring `<prefix><tag><message>` into a log file.
//!
//! ## Example
//!
//! ```
//! use tintlog_core::{LogWriter, MemoryBuffer, OutputFlags, Severity};
//!
//! let buffer = MemoryBuffer::new();
//! let log = LogWriter::new()
//!     .with_stream(buffer.clone())
//!     .with_flags(OutputFlags::empty())
//!     .with_color(false);
//!
//! log.set_prefix("api ");
//! log.emit(Severity::Warning, "disk almost full");
//! assert_eq!(buffer.contents(), "api [WARNING] disk almost full\n");
//! ```

use parking_lot::Mutex;
use std::error::Error;
use std::fmt::{self, Write as _};
use std::panic::Location;
use std::path::{Path, PathBuf};
use tintlog_types::{LoggerConfig, OutputFlags, Severity};

use crate::file;
use crate::stream::OutputStream;
use crate::term;
use crate::time::{self, Origin};

/// Exit status used when a fatal line has been written.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled, colorized line logger.
///
/// All state lives behind one lock, held for the whole of an emit, so a
/// writer can be shared between threads and lines never interleave.
pub struct LogWriter {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    stream: OutputStream,
    flags: OutputFlags,
    prefix: String,
    file: Option<PathBuf>,
    color: bool,
    plain_file: bool,
}

impl Default for Inner {
    fn default() -> Self {
        Self::from(&LoggerConfig::default())
    }
}

impl From<&LoggerConfig> for Inner {
    fn from(config: &LoggerConfig) -> Self {
        Self {
            stream: config.stream.into(),
            flags: config.flags | OutputFlags::MSG_PREFIX,
            prefix: config.prefix.clone(),
            file: config.file.clone().filter(|p| !p.as_os_str().is_empty()),
            color: config.color,
            plain_file: config.plain_file,
        }
    }
}

impl Inner {
    fn line(&self, severity: Severity, message: &str) -> String {
        let mut line = self.prefix.clone();
        line.push_str(&term::paint_tag(severity, self.color));
        line.push_str(&term::paint_message(message, self.color));
        line
    }

    /// `has_newline` reflects the raw message, since coloring wraps any
    /// trailing newline inside the escape sequence.
    fn write_console(&self, line: &str, has_newline: bool, origin: Option<Origin<'_>>) {
        let mut out = time::header(self.flags, origin);
        out.push_str(line);
        if !has_newline {
            out.push('\n');
        }
        if let Err(e) = self.stream.write_all(out.as_bytes()) {
            tracing::warn!(error = %e, "failed to write log line to {:?}", self.stream);
        }
    }

    fn write_file(&mut self, line: &str, origin: Option<Origin<'_>>) {
        let Some(path) = self.file.clone() else {
            return;
        };
        let text = if self.plain_file {
            term::strip(line)
        } else {
            line.to_string()
        };
        if let Err(e) = file::append(&path, &text) {
            self.file = None;
            tracing::warn!(path = %path.display(), error = %e, "disabling file logging");
            let warning = self.line(
                Severity::Warning,
                &format!("Error writing log file {}: {}; file logging disabled", path.display(), e),
            );
            self.write_console(&warning, false, origin);
        }
    }
}

impl LogWriter {
    /// Create a writer with default settings: standard error, time header,
    /// no prefix, no file, colors on.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Create a writer from configuration.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self {
            inner: Mutex::new(Inner::from(config)),
        }
    }

    /// Replace every setting with the ones in `config`.
    pub fn apply_config(&self, config: &LoggerConfig) {
        *self.inner.lock() = Inner::from(config);
        tracing::debug!(?config, "log writer reconfigured");
    }

    /// Builder: set the output stream.
    pub fn with_stream(mut self, stream: impl Into<OutputStream>) -> Self {
        self.inner.get_mut().stream = stream.into();
        self
    }

    /// Builder: set the header flags (`MSG_PREFIX` is always added).
    pub fn with_flags(mut self, flags: OutputFlags) -> Self {
        self.inner.get_mut().flags = flags | OutputFlags::MSG_PREFIX;
        self
    }

    /// Builder: set the custom prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.inner.get_mut().prefix = prefix.into();
        self
    }

    /// Builder: enable or disable ANSI colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.inner.get_mut().color = color;
        self
    }

    /// Builder: mirror lines into `path` (empty disables).
    pub fn with_log_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.inner.get_mut().file = (!path.as_os_str().is_empty()).then(|| path.to_path_buf());
        self
    }

    /// Write `message` at `severity`.
    ///
    /// With [`Severity::Fatal`] the process exits with status
    /// [`FATAL_EXIT_CODE`] once the line is written, and this call does not
    /// return.
    #[track_caller]
    pub fn emit(&self, severity: Severity, message: impl AsRef<str>) {
        self.emit_at(severity, message.as_ref(), Some(Location::caller().into()));
    }

    /// Write a formatted message at `severity`.
    #[track_caller]
    pub fn emit_fmt(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        match args.as_str() {
            Some(message) => self.emit_at(severity, message, Some(location.into())),
            None => self.emit_at(severity, &args.to_string(), Some(location.into())),
        }
    }

    /// Write `context` followed by `error` and its whole source chain,
    /// each separated by `": "`.
    #[track_caller]
    pub fn emit_error(&self, severity: Severity, context: &str, error: &dyn Error) {
        self.emit_at(severity, &error_chain(context, error), Some(Location::caller().into()));
    }

    /// Write a message with an explicit source position (or none).
    pub fn emit_at(&self, severity: Severity, message: &str, origin: Option<Origin<'_>>) {
        self.write(severity, message, origin);
        if severity.is_fatal() {
            std::process::exit(FATAL_EXIT_CODE);
        }
    }

    /// Format and write one line without acting on `Fatal`.
    pub(crate) fn write(&self, severity: Severity, message: &str, origin: Option<Origin<'_>>) {
        let mut inner = self.inner.lock();
        let line = inner.line(severity, message);
        inner.write_file(&line, origin);
        inner.write_console(&line, message.ends_with('\n'), origin);
    }

    /// Shorthand for `emit(Severity::Info, ..)`.
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.emit(Severity::Info, message);
    }

    /// Shorthand for `emit(Severity::Warning, ..)`.
    #[track_caller]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.emit(Severity::Warning, message);
    }

    /// Shorthand for `emit(Severity::Error, ..)`.
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(Severity::Error, message);
    }

    /// Shorthand for `emit(Severity::Debug, ..)`.
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.emit(Severity::Debug, message);
    }

    /// Write a fatal line and exit the process.
    #[track_caller]
    pub fn fatal(&self, message: impl AsRef<str>) -> ! {
        self.write(Severity::Fatal, message.as_ref(), Some(Location::caller().into()));
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Write a bare `"\n"` to the output stream: no header, prefix or tag.
    pub fn blank_line(&self) {
        let inner = self.inner.lock();
        if let Err(e) = inner.stream.write_all(b"\n") {
            tracing::warn!(error = %e, "failed to write blank line to {:?}", inner.stream);
        }
    }

    /// Replace the header flags. `MSG_PREFIX` is always added.
    pub fn set_flags(&self, flags: OutputFlags) {
        let flags = flags | OutputFlags::MSG_PREFIX;
        self.inner.lock().flags = flags;
        tracing::debug!(%flags, "log flags changed");
    }

    /// Current header flags.
    pub fn flags(&self) -> OutputFlags {
        self.inner.lock().flags
    }

    /// Replace the output stream. File logging is unaffected.
    pub fn set_stream(&self, stream: impl Into<OutputStream>) {
        let stream = stream.into();
        tracing::debug!(?stream, "log stream changed");
        self.inner.lock().stream = stream;
    }

    /// Current output stream.
    pub fn stream(&self) -> OutputStream {
        self.inner.lock().stream.clone()
    }

    /// Mirror every line into `path`. An empty path disables file logging.
    pub fn set_log_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let file = (!path.as_os_str().is_empty()).then(|| path.to_path_buf());
        tracing::debug!(file = ?file, "log file changed");
        self.inner.lock().file = file;
    }

    /// Stop mirroring lines into a file.
    pub fn disable_log_file(&self) {
        self.set_log_file("");
    }

    /// The mirror file, if file logging is enabled.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.inner.lock().file.clone()
    }

    /// Whether lines are mirrored into a file.
    pub fn is_file_logging_enabled(&self) -> bool {
        self.inner.lock().file.is_some()
    }

    /// Replace the custom prefix.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.lock().prefix = prefix.into();
    }

    /// Current custom prefix.
    pub fn prefix(&self) -> String {
        self.inner.lock().prefix.clone()
    }

    /// Enable or disable ANSI colors.
    pub fn set_color(&self, color: bool) {
        self.inner.lock().color = color;
    }

    /// Whether ANSI colors are enabled.
    pub fn color(&self) -> bool {
        self.inner.lock().color
    }

    /// Strip ANSI escapes from the file copy of each line.
    pub fn set_plain_file(&self, plain: bool) {
        self.inner.lock().plain_file = plain;
    }

    /// Whether the file copy is stripped of ANSI escapes.
    pub fn plain_file(&self) -> bool {
        self.inner.lock().plain_file
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("LogWriter")
            .field("stream", &inner.stream)
            .field("flags", &inner.flags)
            .field("prefix", &inner.prefix)
            .field("file", &inner.file)
            .field("color", &inner.color)
            .field("plain_file", &inner.plain_file)
            .finish()
    }
}

/// Render `context: error: source: source...`.
pub fn error_chain(context: &str, error: &dyn Error) -> String {
    let mut out = String::new();
    if !context.is_empty() {
        out.push_str(context);
        out.push_str(": ");
    }
    let _ = write!(out, "{}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(out, ": {}", cause);
        source = cause.source();
    }
    out
}
