//! Mirrored log file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Append `text` to the file at `path`, creating it if needed.
///
/// The file is opened and closed on every call; no newline is added.
pub fn append(path: &Path, text: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o700);
    }
    let mut file = options.open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}
