use super::{LockGuard, Sink};

impl Sink {
    /// Writes one line: header (per the current [`LineFormat`](crate::LineFormat)),
    /// `message`, and a newline terminator.
    ///
    /// The line is rendered in full and handed to the writer in a single call,
    /// so a failed write never leaves a fragment behind. When a lock is bound
    /// it is taken before the header is rendered, which keeps timestamps in
    /// output order, and released on every exit path. Write failures are
    /// discarded.
    pub fn emit(&self, level: &str, component: &str, message: &str) {
        let binding = self.snapshot();
        let _guard = binding.lock.map(LockGuard::acquire);

        let mut line = binding.format.render_header(level, component);
        line.reserve(message.len() + 1);
        line.push_str(message);
        line.push('\n');
        let _ = binding.writer.write_all(line.as_bytes());
    }

    /// Flushes the current writer, discarding any error.
    pub fn flush(&self) {
        let binding = self.snapshot();
        let _guard = binding.lock.map(LockGuard::acquire);
        let _ = binding.writer.flush();
    }
}
