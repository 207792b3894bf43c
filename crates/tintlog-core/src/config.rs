//! Configuration loading for tintlog.
//!
//! Settings are resolved in this priority order:
//! 1. Environment variables (`TINTLOG_*`)
//! 2. Values loaded from a YAML file
//! 3. Default values
//!
//! ## Example
//!
//! ```no_run
//! use tintlog_core::{config, LogWriter};
//!
//! let settings = config::load_with_env("/etc/myapp/logging.yml")?;
//! let log = LogWriter::from_config(&settings);
//! log.info("configured");
//! # Ok::<(), tintlog_core::TintError>(())
//! ```

use std::fs;
use std::path::Path;
use tintlog_types::{bail, LoggerConfig, OutputFlags, Result, StreamTarget, TintError};

/// Environment variable overriding the custom prefix.
pub const ENV_PREFIX: &str = "TINTLOG_PREFIX";
/// Environment variable overriding the flags (comma separated names).
pub const ENV_FLAGS: &str = "TINTLOG_FLAGS";
/// Environment variable overriding the stream (`stderr` or `stdout`).
pub const ENV_STREAM: &str = "TINTLOG_STREAM";
/// Environment variable overriding the log file (empty disables).
pub const ENV_FILE: &str = "TINTLOG_FILE";
/// Environment variable overriding color output.
pub const ENV_COLOR: &str = "TINTLOG_COLOR";
/// Environment variable overriding ANSI stripping of the file copy.
pub const ENV_PLAIN_FILE: &str = "TINTLOG_PLAIN_FILE";

/// Load configuration from a YAML file.
///
/// A missing file yields the defaults; an empty file does too.
pub fn load(path: impl AsRef<Path>) -> Result<LoggerConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no log config file, using defaults");
        return Ok(LoggerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| TintError::Config(format!("Failed to read config file {}: {}", path.display(), e)))?;
    parse(&content)
}

/// Parse configuration from YAML text.
pub fn parse(content: &str) -> Result<LoggerConfig> {
    if content.trim().is_empty() {
        return Ok(LoggerConfig::default());
    }
    let mut config: LoggerConfig = serde_yaml::from_str(content)?;
    // An empty `file:` entry means no file
    if let Some(file) = config.file.take() {
        config.set_file(file);
    }
    Ok(config)
}

/// Load a YAML file, then apply environment overrides.
pub fn load_with_env(path: impl AsRef<Path>) -> Result<LoggerConfig> {
    let mut config = load(path)?;
    apply_env(&mut config)?;
    Ok(config)
}

/// Apply `TINTLOG_*` environment overrides to `config`.
pub fn apply_env(config: &mut LoggerConfig) -> Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`, which maps a variable name to its
/// value if set.
pub fn apply_overrides<F>(config: &mut LoggerConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(prefix) = lookup(ENV_PREFIX) {
        config.prefix = prefix;
    }
    if let Some(flags) = lookup(ENV_FLAGS) {
        config.flags = flags
            .parse::<OutputFlags>()
            .map_err(|e| TintError::Config(format!("{}: {}", ENV_FLAGS, e)))?;
    }
    if let Some(stream) = lookup(ENV_STREAM) {
        config.stream = stream
            .parse::<StreamTarget>()
            .map_err(|e| TintError::Config(format!("{}: {}", ENV_STREAM, e)))?;
    }
    if let Some(file) = lookup(ENV_FILE) {
        config.set_file(file);
    }
    if let Some(color) = lookup(ENV_COLOR) {
        config.color = parse_bool(ENV_COLOR, &color)?;
    }
    if let Some(plain) = lookup(ENV_PLAIN_FILE) {
        config.plain_file = parse_bool(ENV_PLAIN_FILE, &plain)?;
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!(Config, "{}: expected a boolean, got '{}'", key, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(dir.path().join("absent.yml")).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logging.yml");
        fs::write(
            &path,
            "prefix: \"worker \"\nflags: [date, short_file]\nstream: stdout\nfile: /tmp/worker.log\ncolor: false\n",
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.prefix, "worker ");
        assert_eq!(config.flags, OutputFlags::DATE | OutputFlags::SHORT_FILE);
        assert_eq!(config.stream, StreamTarget::Stdout);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/worker.log")));
        assert!(!config.color);
        assert!(!config.plain_file);
    }

    #[test]
    fn test_empty_file_entry_disables() {
        let config = parse("file: \"\"\n").unwrap();
        assert!(config.file.is_none());
    }

    #[test]
    fn test_unknown_flag_is_error() {
        assert!(parse("flags: [date, nanoseconds]\n").is_err());
    }

    #[test]
    fn test_env_beats_file() {
        let mut config = parse("prefix: file\nfile: a.log\ncolor: true\n").unwrap();
        apply_overrides(
            &mut config,
            env(&[
                (ENV_PREFIX, "env"),
                (ENV_FLAGS, "utc,time"),
                (ENV_FILE, ""),
                (ENV_COLOR, "off"),
                (ENV_PLAIN_FILE, "YES"),
            ]),
        )
        .unwrap();

        assert_eq!(config.prefix, "env");
        assert_eq!(config.flags, OutputFlags::UTC | OutputFlags::TIME);
        assert!(config.file.is_none());
        assert!(!config.color);
        assert!(config.plain_file);
    }

    #[test]
    fn test_unset_env_leaves_config() {
        let mut config = parse("prefix: kept\n").unwrap();
        apply_overrides(&mut config, env(&[])).unwrap();
        assert_eq!(config.prefix, "kept");
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = LoggerConfig::default();
        let err = apply_overrides(&mut config, env(&[(ENV_COLOR, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(ENV_COLOR));

        let err = apply_overrides(&mut config, env(&[(ENV_STREAM, "printer")])).unwrap_err();
        assert!(matches!(err, TintError::Config(_)));
    }
}
