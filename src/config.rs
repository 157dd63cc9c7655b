//! Configuration for dotprops
//!
//! Per-model settings with sensible defaults. Each `Properties` instance
//! owns its own `Config`; nothing here is process-wide.

/// Delimiter used for new entries unless configured otherwise
pub const DEFAULT_DELIMITER: &str = "=";

/// Settings read by the accessor layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Read Configuration
    // -------------------------------------------------------------------------
    /// Expand resolvable `${key}` references when reading values
    pub auto_expand: bool,

    // -------------------------------------------------------------------------
    // Write Configuration
    // -------------------------------------------------------------------------
    /// Delimiter inserted between key and value for newly created entries,
    /// and written over every entry by `normalize_delimiters`
    pub default_delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_expand: true,
            default_delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Enable or disable expansion on read
    pub fn auto_expand(mut self, enabled: bool) -> Self {
        self.config.auto_expand = enabled;
        self
    }

    /// Set the delimiter used for new entries
    pub fn default_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.default_delimiter = delimiter.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
