//! crates/logging-sink/src/format.rs
//! Line header layout: `[timestamp][thread][level][component] `.

use std::cell::Cell;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

pub(crate) const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
);

static NEXT_THREAD_TAG: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_TAG: Cell<u64> = const { Cell::new(0) };
}

/// Selects the optional fields rendered in front of every line.
///
/// The level and component fields are always present. The default layout
/// matches the service's historical stderr format:
///
/// ```text
/// [2024-05-01 12:00:00.123][3][info][http] message
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineFormat {
    /// Render the UTC wall-clock time with millisecond precision.
    pub timestamp: bool,
    /// Render a small per-thread sequence number.
    pub thread: bool,
}

impl LineFormat {
    /// Timestamp, thread, level, and component.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            timestamp: true,
            thread: true,
        }
    }

    /// Level and component only; deterministic output for tests and pipes.
    ///
    /// ```
    /// use logging_sink::LineFormat;
    ///
    /// assert_eq!(LineFormat::bare().render_header("error", "router"), "[error][router] ");
    /// ```
    #[must_use]
    pub const fn bare() -> Self {
        Self {
            timestamp: false,
            thread: false,
        }
    }

    /// Renders the header that precedes the message, including the separating space.
    #[must_use]
    pub fn render_header(self, level: &str, component: &str) -> String {
        let mut header = String::with_capacity(48 + level.len() + component.len());
        if self.timestamp {
            if let Ok(now) = OffsetDateTime::now_utc().format(TIMESTAMP_FORMAT) {
                let _ = write!(header, "[{now}]");
            }
        }
        if self.thread {
            let _ = write!(header, "[{}]", thread_tag());
        }
        let _ = write!(header, "[{level}][{component}] ");
        header
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::full()
    }
}

fn thread_tag() -> u64 {
    THREAD_TAG.with(|tag| {
        if tag.get() == 0 {
            tag.set(NEXT_THREAD_TAG.fetch_add(1, Ordering::Relaxed));
        }
        tag.get()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn bare_header_has_level_and_component() {
        assert_eq!(
            LineFormat::bare().render_header("trace", "pool"),
            "[trace][pool] "
        );
    }

    #[test]
    fn default_is_full() {
        assert_eq!(LineFormat::default(), LineFormat::full());
    }

    #[test]
    fn full_header_has_four_fields() {
        let header = LineFormat::full().render_header("info", "http");
        assert!(header.ends_with("[info][http] "));
        assert_eq!(header.matches('[').count(), 4);
        // "[YYYY-MM-DD HH:MM:SS.mmm]"
        let timestamp = &header[1..header.find(']').expect("closing bracket")];
        assert_eq!(timestamp.len(), 23);
        assert_eq!(&timestamp[4..5], "-");
        assert_eq!(&timestamp[19..20], ".");
    }

    #[test]
    fn thread_tag_is_stable_per_thread() {
        let first = thread_tag();
        assert_eq!(first, thread_tag());

        let other = thread::spawn(thread_tag).join().expect("thread");
        assert_ne!(first, other);
    }

    #[test]
    fn thread_only_header() {
        let format = LineFormat {
            timestamp: false,
            thread: true,
        };
        let header = format.render_header("debug", "hc");
        assert_eq!(header, format!("[{}][debug][hc] ", thread_tag()));
    }
}
