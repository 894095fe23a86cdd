//! Element Finder Configuration
//!
//! Settings shared by every resolution an [`ElementFinder`](crate::ElementFinder) performs.

use serde::{Deserialize, Serialize};

use crate::result::{ScopeError, ScopeResult};

/// Label reported for the tree root in breadcrumb paths
pub const DEFAULT_ROOT_LABEL: &str = "page";

/// Configuration for the element finder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FinderConfig {
    /// Label used for the root node in error paths
    pub root_label: String,
    /// Search root applied when a call does not pass `testContainer`
    pub default_test_container: Option<String>,
    /// Emit a debug event for every DOM query
    pub log_queries: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            default_test_container: None,
            log_queries: true,
        }
    }
}

impl FinderConfig {
    /// Create a new config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root label
    #[must_use]
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    /// Set the default test container
    #[must_use]
    pub fn with_default_test_container(mut self, container: impl Into<String>) -> Self {
        self.default_test_container = Some(container.into());
        self
    }

    /// Enable or disable query logging
    #[must_use]
    pub fn with_log_queries(mut self, enabled: bool) -> Self {
        self.log_queries = enabled;
        self
    }

    /// Parse a config from YAML text
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid YAML or the root label is blank
    pub fn from_yaml_str(text: &str) -> ScopeResult<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()
    }

    /// Parse a config from JSON text
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid JSON or the root label is blank
    pub fn from_json_str(text: &str) -> ScopeResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()
    }

    fn validate(self) -> ScopeResult<Self> {
        if self.root_label.trim().is_empty() {
            return Err(ScopeError::Config {
                message: "rootLabel must not be empty".to_string(),
            });
        }
        Ok(self)
    }
}
