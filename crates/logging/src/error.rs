//! crates/logging/src/error.rs
//! Errors raised while parsing level names, component names, and configuration.
//!
//! Emission itself never fails; these types only cover the configuration surface.

use thiserror::Error;

/// A level name that is not on the severity scale.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity level `{name}`; expected trace, debug, info, warning, error, or fatal")]
pub struct ParseLevelError {
    name: String,
}

impl ParseLevelError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A component name that does not match any [`ComponentId`](crate::ComponentId).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown logging component `{name}`")]
pub struct ParseComponentError {
    name: String,
}

impl ParseComponentError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Failure to build a [`LogConfig`](crate::LogConfig).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// Two separators with nothing between them, e.g. `info,,http=debug`.
    #[error("empty directive in logging configuration")]
    EmptyDirective,
    /// A directive that is neither `level` nor `component=level`.
    #[error("malformed directive `{0}`; expected `level` or `component=level`")]
    MalformedDirective(String),
    /// A directive naming an unknown level.
    #[error(transparent)]
    Level(#[from] ParseLevelError),
    /// A directive naming an unknown component.
    #[error(transparent)]
    Component(#[from] ParseComponentError),
    /// The configuration variable holds bytes that are not valid UTF-8.
    #[error("environment variable `{0}` is not valid unicode")]
    NotUnicode(String),
}
