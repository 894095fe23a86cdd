//! DOM query collaborator.
//!
//! The resolver never inspects a document itself. It hands a selector and an
//! optional search root to a [`QueryContext`] and receives an ordered
//! [`MatchSet`] back. Browser drivers implement the trait against a live page;
//! [`StaticDocument`] is an in-memory implementation for fixtures and tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use crate::result::{ScopeError, ScopeResult};

/// A matched element as reported by a query context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Element id attribute, if any
    pub id: Option<String>,
    /// Tag name, if known
    pub tag: Option<String>,
    /// Text content
    pub text: String,
    /// Whether the element is rendered and visible
    pub visible: bool,
}

impl Element {
    /// Create a visible element with the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            tag: None,
            text: text.into(),
            visible: true,
        }
    }

    /// Create a hidden element with the given text
    #[must_use]
    pub fn hidden(text: impl Into<String>) -> Self {
        Self {
            visible: false,
            ..Self::new(text)
        }
    }

    /// Set the id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the tag name
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Visibility predicate
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Ordered collection of matched elements, in document order.
///
/// An empty set is a valid result; whether it is an error is decided by the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    elements: Vec<Element>,
}

impl MatchSet {
    /// Create an empty match set
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Number of matched elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// First element
    #[must_use]
    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    /// Last element
    #[must_use]
    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// Iterate in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Apply `f` to every element
    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&Element) -> T,
    {
        self.elements.iter().map(f).collect()
    }

    /// Whether every element satisfies `predicate`.
    ///
    /// Vacuously true for an empty set.
    pub fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Element) -> bool,
    {
        self.elements.iter().all(predicate)
    }

    /// Whether at least one element is visible
    #[must_use]
    pub fn any_visible(&self) -> bool {
        self.elements.iter().any(Element::is_visible)
    }

    /// Text content of every element
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.text.as_str()).collect()
    }

    /// Consume into the underlying elements
    #[must_use]
    pub fn into_vec(self) -> Vec<Element> {
        self.elements
    }
}

impl From<Vec<Element>> for MatchSet {
    fn from(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}

impl FromIterator<Element> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// A query-capable context: the DOM query primitive.
///
/// `search_root` restricts matching to descendants of the given container
/// selector. With `None` the context uses its own default root.
pub trait QueryContext: fmt::Debug + Send + Sync {
    /// Run `selector` and return matches in document order
    ///
    /// # Errors
    ///
    /// Returns error if the selector cannot be evaluated
    fn query(&self, selector: &str, search_root: Option<&str>) -> ScopeResult<MatchSet>;

    /// Short name used in log events
    fn name(&self) -> &str {
        "context"
    }
}

/// A query issued against a [`StaticDocument`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    /// Selector text
    pub selector: String,
    /// Effective search root
    pub search_root: Option<String>,
}

/// In-memory query context keyed by exact selector text.
///
/// Matches are registered per search root; a lookup that has no entry returns
/// an empty set. Matches registered with [`with_matches`](Self::with_matches)
/// belong to whatever default root is in effect when the query runs, so the
/// builder calls can come in any order. Every query is recorded for later
/// inspection.
#[derive(Debug, Default)]
pub struct StaticDocument {
    name: String,
    default_root: Option<String>,
    /// `None` root means the default root
    matches: HashMap<(Option<String>, String), Vec<Element>>,
    failures: HashMap<String, String>,
    log: Mutex<Vec<QueryRecord>>,
}

impl StaticDocument {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "static".to_string(),
            ..Self::default()
        }
    }

    /// Set the name reported in log events
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the search root used when a query passes none
    #[must_use]
    pub fn with_default_root(mut self, root: impl Into<String>) -> Self {
        self.default_root = Some(root.into());
        self
    }

    /// Register matches for `selector` under the default root
    #[must_use]
    pub fn with_matches(self, selector: impl Into<String>, elements: Vec<Element>) -> Self {
        self.insert(None, selector.into(), elements)
    }

    /// Register matches for `selector` searched within `root`
    #[must_use]
    pub fn with_matches_in(
        self,
        root: impl Into<String>,
        selector: impl Into<String>,
        elements: Vec<Element>,
    ) -> Self {
        self.insert(Some(root.into()), selector.into(), elements)
    }

    /// Make queries for `selector` fail with `message`
    #[must_use]
    pub fn with_failure(mut self, selector: impl Into<String>, message: impl Into<String>) -> Self {
        let _ = self.failures.insert(selector.into(), message.into());
        self
    }

    /// Queries issued so far, oldest first
    #[must_use]
    pub fn queries(&self) -> Vec<QueryRecord> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn insert(mut self, root: Option<String>, selector: String, elements: Vec<Element>) -> Self {
        let _ = self.matches.insert((root, selector), elements);
        self
    }
}

impl QueryContext for StaticDocument {
    fn query(&self, selector: &str, search_root: Option<&str>) -> ScopeResult<MatchSet> {
        let root = search_root
            .map(str::to_string)
            .or_else(|| self.default_root.clone());
        let on_default_root = search_root.is_none() || root == self.default_root;

        if let Ok(mut log) = self.log.lock() {
            log.push(QueryRecord {
                selector: selector.to_string(),
                search_root: root.clone(),
            });
        }

        if let Some(message) = self.failures.get(selector) {
            return Err(ScopeError::Query {
                selector: selector.to_string(),
                message: message.clone(),
            });
        }

        let by_default = on_default_root
            .then(|| self.matches.get(&(None, selector.to_string())))
            .flatten();
        Ok(by_default
            .or_else(|| self.matches.get(&(root, selector.to_string())))
            .cloned()
            .map(MatchSet::from)
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
