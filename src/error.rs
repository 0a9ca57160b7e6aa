use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems loading or validating a [`DemoConfig`](crate::config::DemoConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Indent width {0} is out of range (expected 1..={})", crate::config::MAX_INDENT_WIDTH)]
    InvalidIndent(usize),

    #[error("Delimiter '{0}' must not be empty")]
    EmptyDelimiter(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("Unknown sort strategy: '{0}' (expected ascending, descending, odd-first, even-first, div3-first, sum-of-digits or proximity:<n>)")]
    Unknown(String),

    #[error("Invalid proximity target: '{0}'")]
    BadTarget(String),
}
