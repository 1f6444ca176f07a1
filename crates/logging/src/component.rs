//! crates/logging/src/component.rs
//! The closed set of subsystems that own a logger.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseComponentError;

macro_rules! components {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)+) => {
        /// A named subsystem with its own independently adjustable logger.
        ///
        /// The set is fixed at build time, so referring to a component that
        /// does not exist is a compile error rather than a runtime failure.
        /// Declaration order is the order [`loggers`](crate::loggers) reports.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum ComponentId {
            $($(#[$meta])* $variant,)+
        }

        impl ComponentId {
            /// Every component, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Number of components.
            pub const COUNT: usize = Self::ALL.len();

            /// Returns the canonical lowercase name written into log lines.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

components! {
    /// Administrative HTTP endpoint.
    Admin => "admin",
    /// Assertion failures.
    Assert => "assert",
    /// Backtraces captured on fatal signals.
    Backtrace => "backtrace",
    /// Outbound client codecs.
    Client => "client",
    /// Configuration loading and validation.
    Config => "config",
    /// Network connection lifecycle.
    Connection => "connection",
    /// File access and watching.
    File => "file",
    /// Network and HTTP filters.
    Filter => "filter",
    /// Upstream health checking.
    Hc => "hc",
    /// HTTP/1.1 codec and connection manager.
    Http => "http",
    /// HTTP/2 codec.
    Http2 => "http2",
    /// Process startup and shutdown.
    Main => "main",
    /// Statements that do not belong to any other component.
    Misc => "misc",
    /// Mongo proxy.
    Mongo => "mongo",
    /// Connection pools.
    Pool => "pool",
    /// Redis proxy.
    Redis => "redis",
    /// Request routing.
    Router => "router",
    /// Runtime feature flags.
    Runtime => "runtime",
    /// Test scaffolding.
    Testing => "testing",
    /// Upstream clusters and hosts.
    Upstream => "upstream",
}

impl ComponentId {
    /// Returns the position of the component in [`ComponentId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentId {
    type Err = ParseComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseComponentError::new(name))
    }
}
