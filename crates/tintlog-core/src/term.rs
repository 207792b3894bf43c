//! Terminal coloring for tags and messages.

use colored::*;
use tintlog_types::Severity;

/// Color the severity tag, or return it untouched when `enabled` is false.
///
/// When enabled, `colored` still decides at runtime whether escapes are
/// emitted (`NO_COLOR`, `CLICOLOR_FORCE`, terminal detection).
pub fn paint_tag(severity: Severity, enabled: bool) -> String {
    let tag = severity.tag();
    if !enabled {
        return tag.to_string();
    }
    match severity {
        Severity::Error => tag.red().to_string(),
        Severity::Warning => tag.yellow().to_string(),
        Severity::Debug => tag.blue().to_string(),
        Severity::Fatal => tag.bright_red().to_string(),
        Severity::Info => tag.white().to_string(),
    }
}

/// Color the message body with the accent color, whatever the severity.
pub fn paint_message(message: &str, enabled: bool) -> String {
    if enabled {
        message.magenta().to_string()
    } else {
        message.to_string()
    }
}

/// Remove ANSI escape sequences.
pub fn strip(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}
