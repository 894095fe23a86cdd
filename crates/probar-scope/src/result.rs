//! Result and error types for scope resolution.

use thiserror::Error;

/// Result type for scope resolution operations
pub type ScopeResult<T> = Result<T, ScopeError>;

/// Errors that can occur while resolving page object elements
#[derive(Debug, Error)]
pub enum ScopeError {
    /// No element matched the selector
    #[error("Element not found.\n\nPageObject: '{path}'\n  Selector: '{selector}'")]
    NotFound {
        /// Selector that was queried
        selector: String,
        /// Breadcrumb path of the originating node
        path: String,
    },

    /// More than one element matched and `multiple` was not requested
    #[error(
        "Matched more than one element ({count}). If you want to select many elements, use collections instead.\n\nPageObject: '{path}'\n  Selector: '{selector}'"
    )]
    MultipleMatches {
        /// Selector that was queried
        selector: String,
        /// Breadcrumb path of the originating node
        path: String,
        /// Number of matched elements
        count: usize,
    },

    /// Elements matched but none of them is visible
    #[error("Element not visible.\n\nPageObject: '{path}'\n  Selector: '{selector}'")]
    NotVisible {
        /// Selector that was queried
        selector: String,
        /// Breadcrumb path of the originating node
        path: String,
    },

    /// Option values outside of their contract
    #[error("Invalid options: {message}")]
    InvalidOptions {
        /// Error message
        message: String,
    },

    /// The underlying DOM query failed
    #[error("Query for '{selector}' failed: {message}")]
    Query {
        /// Selector that was queried
        selector: String,
        /// Error message
        message: String,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ScopeError {
    /// Zero elements matched
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Too many elements matched
    #[must_use]
    pub const fn is_multiple_matches(&self) -> bool {
        matches!(self, Self::MultipleMatches { .. })
    }

    /// Elements matched but were hidden
    #[must_use]
    pub const fn is_not_visible(&self) -> bool {
        matches!(self, Self::NotVisible { .. })
    }

    /// Selector text carried by resolution errors
    #[must_use]
    pub fn selector(&self) -> Option<&str> {
        match self {
            Self::NotFound { selector, .. }
            | Self::MultipleMatches { selector, .. }
            | Self::NotVisible { selector, .. }
            | Self::Query { selector, .. } => Some(selector),
            _ => None,
        }
    }
}
