//! CLI runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into command handlers.
//! Parsing works on optional string values so it can be tested without mutating the process
//! environment.

use rfcid_uuid::{resolve_namespace, UuidError, DNS};

/// Environment variable holding the default namespace for name-based commands.
pub const NAMESPACE_ENV: &str = "RFCID_NAMESPACE";

/// Environment variable holding the default log directive.
pub const LOG_ENV: &str = "RFCID_LOG";

/// Environment variable holding the upper bound for `v4 --count`.
pub const MAX_COUNT_ENV: &str = "RFCID_MAX_COUNT";

const DEFAULT_LOG_DIRECTIVE: &str = "rfcid=warn";
const DEFAULT_MAX_COUNT: usize = 100_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    Namespace {
        var: &'static str,
        #[source]
        source: UuidError,
    },
    #[error("invalid {var}: expected a positive integer, got '{value}'")]
    MaxCount { var: &'static str, value: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// CLI configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    default_namespace: String,
    log_directive: String,
    max_count: usize,
}

impl CliConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_values(
            std::env::var(NAMESPACE_ENV).ok(),
            std::env::var(LOG_ENV).ok(),
            std::env::var(MAX_COUNT_ENV).ok(),
        )
    }

    /// Builds configuration from optional raw values.
    ///
    /// `None`, empty and whitespace-only values fall back to the defaults.
    pub fn from_values(
        namespace: Option<String>,
        log_directive: Option<String>,
        max_count: Option<String>,
    ) -> ConfigResult<Self> {
        let default_namespace = match non_blank(namespace) {
            Some(ns) => resolve_namespace(&ns).map_err(|source| ConfigError::Namespace {
                var: NAMESPACE_ENV,
                source,
            })?,
            None => DNS.to_owned(),
        };

        let log_directive =
            non_blank(log_directive).unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_owned());

        let max_count = match non_blank(max_count) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::MaxCount {
                        var: MAX_COUNT_ENV,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_COUNT,
        };

        Ok(Self {
            default_namespace,
            log_directive,
            max_count,
        })
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    pub fn log_directive(&self) -> &str {
        &self.log_directive
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
