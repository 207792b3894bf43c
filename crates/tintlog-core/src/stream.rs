//! Console output targets.

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use tintlog_types::StreamTarget;

/// Where console lines go.
///
/// Cloning a `Memory` or `Writer` stream shares the underlying sink, so a
/// stream handed to a [`LogWriter`](crate::LogWriter) can still be read or
/// flushed by the caller.
#[derive(Clone, Default)]
pub enum OutputStream {
    /// Standard error
    #[default]
    Stderr,
    /// Standard output
    Stdout,
    /// In-memory capture
    Memory(MemoryBuffer),
    /// Any other writer
    Writer(SharedWriter),
}

impl OutputStream {
    /// Wrap an arbitrary writer.
    ///
    /// The writer runs while the owning [`LogWriter`](crate::LogWriter) holds
    /// its lock, so it must not log back through that same writer (directly
    /// or via a [`TintLayer`](crate::TintLayer)); doing so deadlocks.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        OutputStream::Writer(SharedWriter::new(writer))
    }

    /// Write `bytes` as a single unit and flush.
    pub(crate) fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            OutputStream::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            OutputStream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            OutputStream::Memory(buffer) => {
                buffer.0.lock().extend_from_slice(bytes);
                Ok(())
            }
            OutputStream::Writer(writer) => {
                let mut out = writer.0.lock();
                out.write_all(bytes)?;
                out.flush()
            }
        }
    }
}

impl From<StreamTarget> for OutputStream {
    fn from(target: StreamTarget) -> Self {
        match target {
            StreamTarget::Stderr => OutputStream::Stderr,
            StreamTarget::Stdout => OutputStream::Stdout,
        }
    }
}

impl From<MemoryBuffer> for OutputStream {
    fn from(buffer: MemoryBuffer) -> Self {
        OutputStream::Memory(buffer)
    }
}

impl fmt::Debug for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStream::Stderr => write!(f, "Stderr"),
            OutputStream::Stdout => write!(f, "Stdout"),
            OutputStream::Memory(buffer) => write!(f, "Memory({} bytes)", buffer.len()),
            OutputStream::Writer(_) => write!(f, "Writer"),
        }
    }
}

/// Growable in-memory sink, shared between clones.
#[derive(Clone, Default)]
pub struct MemoryBuffer(Arc<Mutex<Vec<u8>>>);

impl MemoryBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// Captured text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Number of bytes captured.
    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard captured output.
    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A boxed writer behind a lock, shared between clones.
#[derive(Clone)]
pub struct SharedWriter(Arc<Mutex<Box<dyn Write + Send>>>);

impl SharedWriter {
    /// Wrap `writer`.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Whether two handles point at the same writer.
    pub fn ptr_eq(&self, other: &SharedWriter) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clones_share_bytes() {
        let buffer = MemoryBuffer::new();
        let stream = OutputStream::from(buffer.clone());
        stream.write_all(b"one\n").unwrap();
        stream.write_all(b"two\n").unwrap();
        assert_eq!(buffer.lines(), vec!["one", "two"]);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_writer_stream_flushes_into_target() {
        struct Sink(MemoryBuffer);
        impl Write for Sink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.write(buf)
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = MemoryBuffer::new();
        let stream = OutputStream::writer(Sink(captured.clone()));
        stream.write_all(b"hello").unwrap();
        assert_eq!(captured.contents(), "hello");
    }

    #[test]
    fn test_from_target() {
        assert!(matches!(OutputStream::from(StreamTarget::Stdout), OutputStream::Stdout));
        assert!(matches!(OutputStream::default(), OutputStream::Stderr));
    }
}
