//! `tracing` integration.
//!
//! [`TintLayer`] routes `tracing` events into a [`LogWriter`], so code that
//! is instrumented with `tracing` shows up in the same colorized format.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;
use tintlog_types::Severity;

use crate::global;
use crate::time::Origin;
use crate::writer::LogWriter;

/// A tracing Layer that writes events through a [`LogWriter`].
///
/// Events targeted at `tintlog_core` or `tintlog_types` modules are skipped.
#[derive(Debug, Clone, Default)]
pub struct TintLayer {
    writer: Option<Arc<LogWriter>>,
}

impl TintLayer {
    /// Write through the given writer.
    pub fn new(writer: Arc<LogWriter>) -> Self {
        Self {
            writer: Some(writer),
        }
    }

    /// Write through the process-wide default writer.
    pub fn global() -> Self {
        Self::default()
    }

    fn writer(&self) -> &LogWriter {
        match &self.writer {
            Some(writer) => writer,
            None => global::global(),
        }
    }
}

/// Whether `target` belongs to one of this workspace's crates.
fn is_own_target(target: &str) -> bool {
    ["tintlog_core", "tintlog_types"].iter().any(|krate| {
        target
            .strip_prefix(krate)
            .map_or(false, |rest| rest.is_empty() || rest.starts_with("::"))
    })
}

/// Map a tracing level onto a severity. Tracing has no fatal level.
pub fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Info,
        _ => Severity::Debug,
    }
}

impl<S: Subscriber> Layer<S> for TintLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_own_target(metadata.target()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let origin = metadata
            .file()
            .zip(metadata.line())
            .map(|(file, line)| Origin { file, line });
        self.writer()
            .emit_at(severity_for(metadata.level()), &visitor.finish(), origin);
    }
}

/// Collects the `message` field and renders the rest as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: &dyn std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_field(field.name(), &format_args!("{:?}", value));
        }
    }
}
