// ============================================================================
// Demo configuration loaded from TOML
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::order::Strategy;
use crate::print::PrintStyle;

pub const MAX_INDENT_WIDTH: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortSection {
    /// Order used when the caller does not ask for a specific one.
    pub default_order: Strategy,
}

/// Every key is optional; missing ones fall back to the defaults.
///
/// ```toml
/// [print]
/// indent_width = 4
/// open = "{"
/// close = "}"
/// separator = " "
///
/// [sort]
/// default_order = "ascending"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub print: PrintStyle,
    pub sort: SortSection,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), order = %config.sort.default_order, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_INDENT_WIDTH).contains(&self.print.indent_width) {
            return Err(ConfigError::InvalidIndent(self.print.indent_width));
        }
        if self.print.open.is_empty() {
            return Err(ConfigError::EmptyDelimiter("open"));
        }
        if self.print.close.is_empty() {
            return Err(ConfigError::EmptyDelimiter("close"));
        }
        if self.print.separator.is_empty() {
            return Err(ConfigError::EmptyDelimiter("separator"));
        }
        Ok(())
    }
}
