//! Output flags controlling the line header.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;
use crate::errors::{Result, TintError};

/// Set of flags deciding which metadata precedes each console line.
///
/// The bit values follow the classic line-logger layout so that numeric
/// flag sets written for other tools keep their meaning.
///
/// # Example
///
/// ```
/// use tintlog_types::OutputFlags;
///
/// let flags = OutputFlags::DATE | OutputFlags::TIME;
/// assert!(flags.contains(OutputFlags::TIME));
/// assert_eq!(flags, OutputFlags::STANDARD);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct OutputFlags(u32);

impl OutputFlags {
    /// Local date: `2009/01/23`
    pub const DATE: OutputFlags = OutputFlags(1 << 0);
    /// Local time: `01:23:23`
    pub const TIME: OutputFlags = OutputFlags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies a time field.
    pub const MICROSECONDS: OutputFlags = OutputFlags(1 << 2);
    /// Full source path and line of the caller: `/a/b/c/main.rs:23`
    pub const LONG_FILE: OutputFlags = OutputFlags(1 << 3);
    /// Final path element and line of the caller: `main.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: OutputFlags = OutputFlags(1 << 4);
    /// Render date and time in UTC rather than the local zone
    pub const UTC: OutputFlags = OutputFlags(1 << 5);
    /// Place the prefix right before the message instead of at line start
    pub const MSG_PREFIX: OutputFlags = OutputFlags(1 << 6);
    /// Initial values for the standard logger
    pub const STANDARD: OutputFlags = OutputFlags(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, OutputFlags); 7] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("long_file", Self::LONG_FILE),
        ("short_file", Self::SHORT_FILE),
        ("utc", Self::UTC),
        ("msg_prefix", Self::MSG_PREFIX),
    ];

    const ALL_BITS: u32 = (1 << 7) - 1;

    /// The empty flag set.
    pub const fn empty() -> Self {
        OutputFlags(0)
    }

    /// Build a flag set from raw bits, dropping unknown bits.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        OutputFlags(bits & Self::ALL_BITS)
    }

    /// Raw bit value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is also set in `self`.
    pub const fn contains(self, other: OutputFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set every flag in `other`.
    pub fn insert(&mut self, other: OutputFlags) {
        self.0 |= other.0;
    }

    /// Lowercase names of the set flags, in bit order.
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Parse a list of flag names. Names are case-insensitive and `-` is
    /// accepted in place of `_`; `standard` expands to `date` + `time`.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = OutputFlags::empty();
        for name in names {
            let name = name.as_ref().trim().to_lowercase().replace('-', "_");
            if name.is_empty() {
                continue;
            }
            if name == "standard" {
                flags.insert(Self::STANDARD);
                continue;
            }
            match Self::NAMED.iter().find(|(n, _)| *n == name) {
                Some((_, flag)) => flags.insert(*flag),
                None => {
                    return Err(TintError::Validation(format!("Unknown output flag: {}", name)))
                }
            }
        }
        Ok(flags)
    }
}

impl BitOr for OutputFlags {
    type Output = OutputFlags;

    fn bitor(self, rhs: OutputFlags) -> OutputFlags {
        OutputFlags(self.0 | rhs.0)
    }
}

impl FromStr for OutputFlags {
    type Err = TintError;

    /// Parse a comma separated list such as `"date, time"`.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_names(s.split(','))
    }
}

impl TryFrom<Vec<String>> for OutputFlags {
    type Error = TintError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::from_names(names)
    }
}

impl From<OutputFlags> for Vec<String> {
    fn from(flags: OutputFlags) -> Self {
        flags.names().into_iter().map(String::from).collect()
    }
}

impl fmt::Debug for OutputFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutputFlags({})", self.names().join(" | "))
    }
}

impl fmt::Display for OutputFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bit_values() {
        assert_eq!(OutputFlags::DATE.bits(), 1);
        assert_eq!(OutputFlags::TIME.bits(), 2);
        assert_eq!(OutputFlags::MSG_PREFIX.bits(), 64);
        assert_eq!(OutputFlags::STANDARD.bits(), 3);
    }

    #[test]
    fn test_parse_names() {
        let flags: OutputFlags = "date, Short-File".parse().unwrap();
        assert_eq!(flags, OutputFlags::DATE | OutputFlags::SHORT_FILE);
        assert_eq!("".parse::<OutputFlags>().unwrap(), OutputFlags::empty());
        assert_eq!("standard".parse::<OutputFlags>().unwrap(), OutputFlags::STANDARD);
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "date,weekday".parse::<OutputFlags>().unwrap_err();
        assert!(err.to_string().contains("weekday"));
    }

    #[test]
    fn test_insert_and_contains() {
        let mut flags = OutputFlags::DATE;
        flags.insert(OutputFlags::TIME);
        assert_eq!(flags, OutputFlags::STANDARD);
        assert!(flags.contains(OutputFlags::TIME));
        assert!(!flags.contains(OutputFlags::TIME | OutputFlags::UTC));
    }

    #[test]
    fn test_yaml_uses_names() {
        let yaml = serde_yaml::to_string(&(OutputFlags::TIME | OutputFlags::UTC)).unwrap();
        assert!(yaml.contains("- time"));
        assert!(yaml.contains("- utc"));
        let back: OutputFlags = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, OutputFlags::TIME | OutputFlags::UTC);
    }

    proptest! {
        #[test]
        fn names_round_trip(bits in 0u32..128) {
            let flags = OutputFlags::from_bits_truncate(bits);
            prop_assert_eq!(OutputFlags::from_names(flags.names()).unwrap(), flags);
        }

        #[test]
        fn truncate_drops_unknown_bits(bits in any::<u32>()) {
            prop_assert!(OutputFlags::from_bits_truncate(bits).bits() < 128);
        }
    }
}
