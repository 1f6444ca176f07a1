//! crates/logging/src/config.rs
//! Threshold and format configuration parsed from directive strings.

use std::env;
use std::str::FromStr;

use logging_sink::LineFormat;

use crate::component::ComponentId;
use crate::error::ConfigError;
use crate::levels::SeverityLevel;
use crate::registry::Registry;

/// Environment variable read by [`LogConfig::from_env`].
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Default threshold, per-component overrides, and line layout.
///
/// The textual form is a comma-separated list of directives. A bare level sets
/// the default; `component=level` overrides one component. Later directives
/// win.
///
/// ```
/// use logging::{ComponentId, LogConfig, SeverityLevel};
///
/// let config: LogConfig = "warning,http=debug,router=trace".parse()?;
/// assert_eq!(config.level, SeverityLevel::Warning);
/// assert_eq!(config.level_for(ComponentId::Http), SeverityLevel::Debug);
/// assert_eq!(config.level_for(ComponentId::Router), SeverityLevel::Trace);
/// assert_eq!(config.level_for(ComponentId::Pool), SeverityLevel::Warning);
/// # Ok::<(), logging::ConfigError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Threshold applied to every component without an override.
    pub level: SeverityLevel,
    /// Per-component thresholds, applied in order.
    pub components: Vec<(ComponentId, SeverityLevel)>,
    /// Line layout installed on the sink.
    pub format: LineFormat,
}

impl LogConfig {
    /// Creates a configuration with `level` as the default and no overrides.
    #[must_use]
    pub fn new(level: SeverityLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Adds an override for `id`.
    #[must_use]
    pub fn with_component(mut self, id: ComponentId, level: SeverityLevel) -> Self {
        self.components.push((id, level));
        self
    }

    /// Replaces the line layout.
    #[must_use]
    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the threshold `id` ends up with once the configuration is applied.
    #[must_use]
    pub fn level_for(&self, id: ComponentId) -> SeverityLevel {
        self.components
            .iter()
            .rev()
            .find(|(component, _)| *component == id)
            .map_or(self.level, |&(_, level)| level)
    }

    /// Applies a single directive (e.g. `"info"` or `"upstream=trace"`).
    pub fn apply_directive(&mut self, directive: &str) -> Result<(), ConfigError> {
        let directive = directive.trim();
        if directive.is_empty() {
            return Err(ConfigError::EmptyDirective);
        }

        match directive.split_once('=') {
            None => self.level = directive.parse()?,
            Some((component, level)) => {
                let component = component.trim();
                let level = level.trim();
                if component.is_empty() || level.is_empty() || level.contains('=') {
                    return Err(ConfigError::MalformedDirective(directive.to_owned()));
                }
                self.components.push((component.parse()?, level.parse()?));
            }
        }
        Ok(())
    }

    /// Reads [`LOG_LEVEL_ENV`]; an unset variable yields the default configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(LOG_LEVEL_ENV)
    }

    /// Reads the named environment variable; an unset variable yields the default configuration.
    pub fn from_env_var(name: &str) -> Result<Self, ConfigError> {
        match env::var(name) {
            Ok(value) => value.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name.to_owned())),
        }
    }

    /// Sets every logger in `registry` to its configured threshold and installs the format.
    ///
    /// The sink's lock binding is left alone; this is safe to call at any time.
    pub fn apply(&self, registry: &Registry) {
        registry.set_all_levels(self.level);
        for &(id, level) in &self.components {
            registry.logger(id).set_level(level);
        }
        registry.sink().set_format(self.format);
    }
}

impl FromStr for LogConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = Self::default();
        if s.trim().is_empty() {
            return Ok(config);
        }
        for directive in s.split(',') {
            config.apply_directive(directive)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseComponentError, ParseLevelError};
    use logging_sink::MemoryWriter;

    #[test]
    fn empty_string_is_default() {
        assert_eq!("".parse::<LogConfig>(), Ok(LogConfig::default()));
        assert_eq!("  ".parse::<LogConfig>(), Ok(LogConfig::default()));
    }

    #[test]
    fn bare_level_sets_default() {
        let config: LogConfig = "debug".parse().expect("valid");
        assert_eq!(config, LogConfig::new(SeverityLevel::Debug));
    }

    #[test]
    fn later_directives_win() {
        let config: LogConfig = "error, http=trace, info, http=warn".parse().expect("valid");
        assert_eq!(config.level, SeverityLevel::Info);
        assert_eq!(config.level_for(ComponentId::Http), SeverityLevel::Warning);
    }

    #[test]
    fn empty_directive_is_rejected() {
        assert_eq!(
            "info,,http=debug".parse::<LogConfig>(),
            Err(ConfigError::EmptyDirective)
        );
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        for input in ["=debug", "http=", "http=debug=trace"] {
            assert!(
                matches!(
                    input.parse::<LogConfig>(),
                    Err(ConfigError::MalformedDirective(_))
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn unknown_names_surface_their_cause() {
        assert_eq!(
            "loud".parse::<LogConfig>(),
            Err(ConfigError::Level(ParseLevelError::new("loud")))
        );
        assert_eq!(
            "quic=debug".parse::<LogConfig>(),
            Err(ConfigError::Component(ParseComponentError::new("quic")))
        );
    }

    #[test]
    fn unset_variable_yields_default() {
        let config = LogConfig::from_env_var("LOGGING_CONFIG_TEST_NEVER_SET").expect("default");
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn apply_sets_levels_and_format_without_lock() {
        let registry = Registry::with_sink(logging_sink::Sink::with_writer(MemoryWriter::new()));
        let config = LogConfig::new(SeverityLevel::Error)
            .with_component(ComponentId::Router, SeverityLevel::Trace)
            .with_format(LineFormat::bare());

        config.apply(&registry);

        assert_eq!(registry.logger(ComponentId::Router).level(), SeverityLevel::Trace);
        assert_eq!(registry.logger(ComponentId::Admin).level(), SeverityLevel::Error);
        assert_eq!(registry.sink().format(), LineFormat::bare());
        assert!(!registry.sink().has_lock());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = LogConfig::new(SeverityLevel::Warning)
            .with_component(ComponentId::Upstream, SeverityLevel::Debug);
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("\"upstream\""));
        let back: LogConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
