//! Configuration for the guesser

use serde::{Deserialize, Serialize};

/// Module named in the import line of generated suggestions
pub const DEFAULT_COMPONENT_PACKAGE: &str = "@specfocus/view-focus.mui-demo";

/// Configuration for guessing views from sample records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuesserConfig {
    /// Maximum number of records to inspect (0 = all)
    pub sample_size: usize,

    /// Maximum depth for expanding nested objects into dotted sources
    pub max_depth: usize,

    /// Emit a code suggestion the first time a view is guessed
    pub emit_suggestions: bool,

    /// Package the generated import line refers to
    pub component_package: String,
}

impl Default for GuesserConfig {
    fn default() -> Self {
        Self {
            sample_size: 0,
            max_depth: 3,
            // Suggestions are a development aid; release builds stay quiet
            emit_suggestions: cfg!(debug_assertions),
            component_package: DEFAULT_COMPONENT_PACKAGE.to_string(),
        }
    }
}

impl GuesserConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> GuesserConfigBuilder {
        GuesserConfigBuilder::default()
    }
}

/// Builder for GuesserConfig
#[derive(Debug, Default)]
pub struct GuesserConfigBuilder {
    config: GuesserConfig,
}

impl GuesserConfigBuilder {
    /// Set the sample size (0 = all records)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Set the maximum nested-object depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Enable or disable code suggestions
    pub fn emit_suggestions(mut self, emit: bool) -> Self {
        self.config.emit_suggestions = emit;
        self
    }

    /// Set the package named in generated imports
    pub fn component_package(mut self, package: impl Into<String>) -> Self {
        self.config.component_package = package.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> GuesserConfig {
        self.config
    }
}
