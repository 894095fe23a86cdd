//! Per-call find options.

use serde::{Deserialize, Serialize};

use crate::result::{ScopeError, ScopeResult};

/// Options recognized by selector building and element resolution.
///
/// `reset_scope` here is the call-site override: it bypasses the ancestor
/// walk entirely. It is unrelated to the node-level reset declared with
/// [`PageNode::with_reset_scope`](crate::PageNode::with_reset_scope).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FindOptions {
    /// Explicit scope appended to (or replacing) the ancestor scope
    pub scope: Option<String>,
    /// Use `scope` verbatim and ignore the node's ancestors
    pub reset_scope: bool,
    /// Text-content filter
    pub contains: Option<String>,
    /// 0-based index filter, wins over `last`
    pub at: Option<usize>,
    /// Keep only the last match
    pub last: bool,
    /// Allow more than one match
    pub multiple: bool,
    /// Container selector the query is restricted to
    pub test_container: Option<String>,
    /// Key reported for the originating node in error paths
    pub page_object_key: Option<String>,
}

impl FindOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidOptions` for malformed text or out-of-contract values
    /// such as a negative `at`
    pub fn from_json(text: &str) -> ScopeResult<Self> {
        serde_json::from_str(text).map_err(|e| ScopeError::InvalidOptions {
            message: e.to_string(),
        })
    }

    /// Set the explicit scope
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Bypass the ancestor scope walk
    #[must_use]
    pub fn reset_scope(mut self, reset: bool) -> Self {
        self.reset_scope = reset;
        self
    }

    /// Filter by text content
    #[must_use]
    pub fn contains(mut self, text: impl Into<String>) -> Self {
        self.contains = Some(text.into());
        self
    }

    /// Filter by 0-based index
    #[must_use]
    pub fn at(mut self, index: usize) -> Self {
        self.at = Some(index);
        self
    }

    /// Keep only the last match
    #[must_use]
    pub fn last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }

    /// Allow multiple matches
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Restrict the search to a container
    #[must_use]
    pub fn test_container(mut self, container: impl Into<String>) -> Self {
        self.test_container = Some(container.into());
        self
    }

    /// Set the key reported for the originating node
    #[must_use]
    pub fn page_object_key(mut self, key: impl Into<String>) -> Self {
        self.page_object_key = Some(key.into());
        self
    }

    /// Explicit scope, or empty
    #[must_use]
    pub fn scope_or_empty(&self) -> &str {
        self.scope.as_deref().unwrap_or("")
    }
}
