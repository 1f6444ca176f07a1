//! crates/logging-sink/src/writer.rs
//! Destinations the sink streams rendered lines into.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Destination for rendered log lines.
///
/// Writers are shared between threads and called through `&self`, so they
/// must provide their own interior synchronization for each individual call.
/// The sink issues exactly one call per rendered line, terminator included.
pub trait SinkWriter: Send + Sync {
    /// Writes the whole buffer.
    fn write_all(&self, buf: &[u8]) -> io::Result<()>;

    /// Flushes buffered output.
    fn flush(&self) -> io::Result<()>;
}

/// Writes to the process error stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrWriter;

impl SinkWriter for StderrWriter {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().lock().flush()
    }
}

/// In-memory writer whose clones share one buffer.
///
/// Hand one clone to a [`Sink`](crate::Sink) and keep another to inspect what
/// was written.
///
/// ```
/// use logging_sink::{MemoryWriter, SinkWriter};
///
/// let writer = MemoryWriter::new();
/// let observer = writer.clone();
/// writer.write_all(b"first\nsecond\n")?;
/// assert_eq!(observer.lines(), ["first", "second"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.buffer().clone()
    }

    /// Returns the written bytes as text, replacing invalid UTF-8.
    #[must_use]
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }

    /// Returns the written text split into lines, without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents_string().lines().map(str::to_owned).collect()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.buffer().clear();
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for MemoryWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryWriter")
            .field("len", &self.buffer().len())
            .finish()
    }
}

impl SinkWriter for MemoryWriter {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.buffer().extend_from_slice(buf);
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_buffer() {
        let writer = MemoryWriter::new();
        let observer = writer.clone();
        writer.write_all(b"abc").expect("write succeeds");
        assert_eq!(observer.contents(), b"abc".to_vec());
    }

    #[test]
    fn clear_discards_contents() {
        let writer = MemoryWriter::new();
        writer.write_all(b"line\n").expect("write succeeds");
        writer.clear();
        assert!(writer.contents().is_empty());
        assert!(writer.lines().is_empty());
    }

    #[test]
    fn contents_string_replaces_invalid_utf8() {
        let writer = MemoryWriter::new();
        writer.write_all(&[b'o', b'k', 0xff]).expect("write succeeds");
        assert_eq!(writer.contents_string(), "ok\u{fffd}");
    }

    #[test]
    fn debug_reports_length() {
        let writer = MemoryWriter::new();
        writer.write_all(b"12345").expect("write succeeds");
        assert!(format!("{writer:?}").contains("len: 5"));
    }
}
