//! Line header: timestamp and caller location.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{Display, Write};
use std::panic::Location;
use std::path::Path;
use tintlog_types::OutputFlags;

/// Source position reported in the header by `SHORT_FILE`/`LONG_FILE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin<'a> {
    /// Source file as known to the compiler
    pub file: &'a str,
    /// 1-based line number
    pub line: u32,
}

impl<'a> From<&'a Location<'a>> for Origin<'a> {
    fn from(location: &'a Location<'a>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Build the header for a console line at the current instant.
pub fn header(flags: OutputFlags, origin: Option<Origin<'_>>) -> String {
    let mut out = if flags.contains(OutputFlags::UTC) {
        timestamp(flags, &Utc::now())
    } else {
        timestamp(flags, &Local::now())
    };
    if let Some(origin) = origin {
        push_origin(&mut out, flags, origin);
    }
    out
}

/// Render the date/time part of a header for `at`.
///
/// Each field is followed by a single space; no field yields an empty string.
pub fn timestamp<Tz>(flags: OutputFlags, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if flags.contains(OutputFlags::DATE) {
        let _ = write!(out, "{} ", at.format("%Y/%m/%d"));
    }
    if flags.contains(OutputFlags::MICROSECONDS) {
        let _ = write!(out, "{} ", at.format("%H:%M:%S%.6f"));
    } else if flags.contains(OutputFlags::TIME) {
        let _ = write!(out, "{} ", at.format("%H:%M:%S"));
    }
    out
}

fn push_origin(out: &mut String, flags: OutputFlags, origin: Origin<'_>) {
    let file = if flags.contains(OutputFlags::SHORT_FILE) {
        Path::new(origin.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(origin.file)
    } else if flags.contains(OutputFlags::LONG_FILE) {
        origin.file
    } else {
        return;
    };
    let _ = write!(out, "{}:{}: ", file, origin.line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2009, 1, 23, 1, 23, 23).unwrap() + Duration::microseconds(123_123)
    }

    #[test]
    fn test_timestamp_fields() {
        let at = instant();
        assert_eq!(timestamp(OutputFlags::empty(), &at), "");
        assert_eq!(timestamp(OutputFlags::TIME, &at), "01:23:23 ");
        assert_eq!(timestamp(OutputFlags::STANDARD, &at), "2009/01/23 01:23:23 ");
        assert_eq!(
            timestamp(OutputFlags::DATE | OutputFlags::MICROSECONDS, &at),
            "2009/01/23 01:23:23.123123 "
        );
    }

    #[test]
    fn test_msg_prefix_adds_nothing() {
        assert_eq!(timestamp(OutputFlags::MSG_PREFIX, &instant()), "");
    }

    #[test]
    fn test_origin_short_and_long() {
        let origin = Origin {
            file: "crates/app/src/main.rs",
            line: 42,
        };
        assert_eq!(header(OutputFlags::SHORT_FILE, Some(origin)), "main.rs:42: ");
        assert_eq!(
            header(OutputFlags::LONG_FILE, Some(origin)),
            "crates/app/src/main.rs:42: "
        );
        assert_eq!(
            header(OutputFlags::LONG_FILE | OutputFlags::SHORT_FILE, Some(origin)),
            "main.rs:42: "
        );
        assert_eq!(header(OutputFlags::empty(), Some(origin)), "");
    }

    #[test]
    fn test_origin_from_location() {
        let location = Location::caller();
        let origin = Origin::from(location);
        assert_eq!(origin.line, location.line());
        assert!(origin.file.ends_with(".rs"));
    }
}
