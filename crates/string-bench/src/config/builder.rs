//! Configuration builder

use tracing_subscriber::EnvFilter;

use crate::Error;
use crate::suite::SuiteSelection;

/// Harness configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub suite: SuiteSelection,
    pub logging: LoggingConfig,
}

impl Config {
    #[must_use]
    pub const fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    #[must_use]
    pub const fn suite(&self) -> SuiteSelection {
        self.suite
    }

    #[must_use]
    pub const fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub level: String,
    pub json: bool,
}

/// Configuration builder with fluent API
#[derive(Debug)]
pub struct ConfigBuilder {
    suite: SuiteSelection,
    logging: LoggingConfig,
}

impl ConfigBuilder {
    const DEFAULT_LOG_LEVEL: &'static str = "warn";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            suite: SuiteSelection::Conversion,
            logging: LoggingConfig {
                level: String::new(),
                json: false,
            },
        }
    }

    #[must_use]
    pub const fn suite(mut self, suite: SuiteSelection) -> Self {
        self.suite = suite;
        self
    }

    #[must_use]
    pub fn log_level(mut self, level: String) -> Self {
        self.logging.level = level;
        self
    }

    #[must_use]
    pub const fn json_logs(mut self, json: bool) -> Self {
        self.logging.json = json;
        self
    }

    pub fn build(self) -> Result<Config, Error> {
        let mut logging = self.logging;
        if logging.level.is_empty() {
            logging.level = Self::DEFAULT_LOG_LEVEL.to_string();
        }

        EnvFilter::try_new(&logging.level).map_err(|e| {
            Error::Config(format!("Invalid log level '{}': {e}", logging.level))
        })?;

        Ok(Config {
            suite: self.suite,
            logging,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
