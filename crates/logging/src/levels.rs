//! crates/logging/src/levels.rs
//! The six-step severity scale shared by every component logger.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// Severity of a statement, and the threshold a [`Logger`](crate::Logger) filters against.
///
/// Levels are totally ordered from most verbose to most severe. A statement is
/// emitted when its level is at least the logger's threshold, so `Trace` only
/// passes a `Trace` threshold while `Fatal` passes any threshold.
///
/// ```
/// use logging::SeverityLevel;
///
/// assert!(SeverityLevel::Trace < SeverityLevel::Debug);
/// assert!(SeverityLevel::Error < SeverityLevel::Fatal);
/// assert_eq!("warn".parse::<SeverityLevel>(), Ok(SeverityLevel::Warning));
/// assert_eq!(SeverityLevel::Fatal.to_string(), "fatal");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum SeverityLevel {
    /// Fine-grained tracing, compiled out of optimized builds.
    Trace = 0,
    /// Developer diagnostics, compiled out of optimized builds.
    Debug = 1,
    /// Normal operational messages. The threshold before initialization.
    #[default]
    Info = 2,
    /// Unexpected but recoverable conditions.
    Warning = 3,
    /// Failures of a single operation.
    Error = 4,
    /// Failures the process cannot continue past.
    Fatal = 5,
}

impl SeverityLevel {
    /// Every level, most verbose first.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the lowercase label written into log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Returns the numeric position on the scale (`Trace` is 0).
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Converts a numeric position back into a level.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Reports whether a statement at `self` passes a logger whose threshold is `threshold`.
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        self >= threshold
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeverityLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let level = match name.to_ascii_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warning" | "warn" => Self::Warning,
            "error" | "err" => Self::Error,
            "fatal" | "critical" => Self::Fatal,
            _ => return Err(ParseLevelError::new(name)),
        };
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_from_trace_to_fatal() {
        for pair in SeverityLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn raw_values_follow_declaration_order() {
        for (index, level) in SeverityLevel::ALL.iter().enumerate() {
            assert_eq!(usize::from(level.as_raw()), index);
            assert_eq!(SeverityLevel::from_raw(level.as_raw()), Some(*level));
        }
        assert_eq!(SeverityLevel::from_raw(6), None);
        assert_eq!(SeverityLevel::from_raw(u8::MAX), None);
    }

    #[test]
    fn default_threshold_is_info() {
        assert_eq!(SeverityLevel::default(), SeverityLevel::Info);
    }

    #[test]
    fn parse_accepts_aliases_and_case() {
        assert_eq!("TRACE".parse::<SeverityLevel>(), Ok(SeverityLevel::Trace));
        assert_eq!(" Debug ".parse::<SeverityLevel>(), Ok(SeverityLevel::Debug));
        assert_eq!("warn".parse::<SeverityLevel>(), Ok(SeverityLevel::Warning));
        assert_eq!("err".parse::<SeverityLevel>(), Ok(SeverityLevel::Error));
        assert_eq!("critical".parse::<SeverityLevel>(), Ok(SeverityLevel::Fatal));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let error = "verbose".parse::<SeverityLevel>().unwrap_err();
        assert_eq!(error.name(), "verbose");
        assert!(error.to_string().contains("verbose"));
        assert!("".parse::<SeverityLevel>().is_err());
        assert!("off".parse::<SeverityLevel>().is_err());
    }

    #[test]
    fn names_round_trip_through_parse() {
        for level in SeverityLevel::ALL {
            assert_eq!(level.name().parse::<SeverityLevel>(), Ok(level));
        }
    }

    #[test]
    fn fatal_passes_every_threshold_and_trace_only_trace() {
        for threshold in SeverityLevel::ALL {
            assert!(SeverityLevel::Fatal.passes(threshold));
            assert_eq!(
                SeverityLevel::Trace.passes(threshold),
                threshold == SeverityLevel::Trace
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&SeverityLevel::Warning).expect("serialize");
        assert_eq!(json, "\"warning\"");
        let level: SeverityLevel = serde_json::from_str("\"fatal\"").expect("deserialize");
        assert_eq!(level, SeverityLevel::Fatal);
    }
}
