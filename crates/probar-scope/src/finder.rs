//! Element resolution.
//!
//! Every call is a one-shot pipeline: build the selector, pick the query
//! context, query once, apply the match-count guards, return or fail.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use probar_scope::prelude::*;
//!
//! let doc = StaticDocument::new()
//!     .with_matches(".section .button", vec![Element::new("Save")]);
//! let mut tree = PageTree::with_context(PageNode::new(), Arc::new(doc));
//! let section = tree.attach(tree.root(), PageNode::scoped(".section").with_key("section"));
//!
//! let global = StaticDocument::new();
//! let finder = ElementFinder::new(&tree, &global);
//! let matches = finder
//!     .find_element_with_assert(section, ".button", &FindOptions::default())
//!     .unwrap();
//! assert_eq!(matches.texts(), vec!["Save"]);
//! ```

use crate::config::FinderConfig;
use crate::diagnostics::{describe_path, guard_multiple};
use crate::dom::{MatchSet, QueryContext};
use crate::options::FindOptions;
use crate::page_object::{NodeId, TreeNavigator};
use crate::result::{ScopeError, ScopeResult};
use crate::selector;

/// Test context attached to the root of `node`'s tree, if any
#[must_use]
pub fn find_test_context<T: TreeNavigator>(tree: &T, node: NodeId) -> Option<&dyn QueryContext> {
    tree.context_of(tree.root_of(node))
}

/// Resolves page object nodes to matched elements.
///
/// Queries go to the test context found on the tree root; when the tree has
/// none, they go to the `global` fallback context.
#[derive(Debug)]
pub struct ElementFinder<'a, T: TreeNavigator> {
    tree: &'a T,
    global: &'a dyn QueryContext,
    config: FinderConfig,
}

impl<'a, T: TreeNavigator> ElementFinder<'a, T> {
    /// Create a finder with the default configuration
    #[must_use]
    pub fn new(tree: &'a T, global: &'a dyn QueryContext) -> Self {
        Self::with_config(tree, global, FinderConfig::default())
    }

    /// Create a finder with an explicit configuration
    #[must_use]
    pub fn with_config(tree: &'a T, global: &'a dyn QueryContext, config: FinderConfig) -> Self {
        Self {
            tree,
            global,
            config,
        }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Selector for `target` under `node`
    #[must_use]
    pub fn build_selector(&self, node: NodeId, target: &str, options: &FindOptions) -> String {
        selector::build_selector(self.tree, node, target, options)
    }

    /// Breadcrumb path of `node` for error messages
    #[must_use]
    pub fn describe(&self, node: NodeId, options: &FindOptions) -> String {
        describe_path(
            self.tree,
            node,
            options.page_object_key.as_deref(),
            &self.config.root_label,
        )
    }

    /// Resolve `target`, failing when nothing matches
    ///
    /// # Errors
    ///
    /// `NotFound` on zero matches, `MultipleMatches` on more than one match
    /// without `multiple`, `Query` if the context fails
    pub fn find_element_with_assert(
        &self,
        node: NodeId,
        target: &str,
        options: &FindOptions,
    ) -> ScopeResult<MatchSet> {
        let selector = self.build_selector(node, target, options);
        self.find_element_raw(node, &selector, options)
    }

    /// Resolve `target`, returning an empty set when nothing matches
    ///
    /// # Errors
    ///
    /// `MultipleMatches` on more than one match without `multiple`, `Query`
    /// if the context fails
    pub fn find_element(
        &self,
        node: NodeId,
        target: &str,
        options: &FindOptions,
    ) -> ScopeResult<MatchSet> {
        let selector = self.build_selector(node, target, options);
        self.query(node, &selector, options)
    }

    /// Resolve `target` and require at least one visible match
    ///
    /// # Errors
    ///
    /// Everything [`find_element_with_assert`](Self::find_element_with_assert)
    /// returns, plus `NotVisible` when every match is hidden
    pub fn find_visible_element_with_assert(
        &self,
        node: NodeId,
        target: &str,
        options: &FindOptions,
    ) -> ScopeResult<MatchSet> {
        let selector = self.build_selector(node, target, options);
        let matches = self.find_element_raw(node, &selector, options)?;

        if !matches.any_visible() {
            return Err(ScopeError::NotVisible {
                selector,
                path: self.describe(node, options),
            });
        }
        Ok(matches)
    }

    /// Resolve an already composed selector, failing when nothing matches
    ///
    /// # Errors
    ///
    /// Same as [`find_element_with_assert`](Self::find_element_with_assert)
    pub fn find_element_raw(
        &self,
        node: NodeId,
        selector: &str,
        options: &FindOptions,
    ) -> ScopeResult<MatchSet> {
        let matches = self.query(node, selector, options)?;

        if matches.is_empty() {
            return Err(ScopeError::NotFound {
                selector: selector.to_string(),
                path: self.describe(node, options),
            });
        }
        Ok(matches)
    }

    /// Resolve every match of `target`; an empty result is not an error
    ///
    /// # Errors
    ///
    /// `Query` if the context fails
    pub fn find_many(
        &self,
        node: NodeId,
        target: &str,
        options: &FindOptions,
    ) -> ScopeResult<MatchSet> {
        let options = options.clone().multiple(true);
        self.find_element(node, target, &options)
    }

    fn query(&self, node: NodeId, selector: &str, options: &FindOptions) -> ScopeResult<MatchSet> {
        let test_context = find_test_context(self.tree, node);
        let context = test_context.unwrap_or(self.global);
        let container = options
            .test_container
            .as_deref()
            .or(self.config.default_test_container.as_deref());

        let matches = context.query(selector, container)?;

        if self.config.log_queries {
            tracing::debug!(
                selector,
                container,
                context = context.name(),
                fallback = test_context.is_none(),
                matched = matches.len(),
                "queried page object element"
            );
        }

        guard_multiple(selector, &matches, options, || self.describe(node, options))?;
        Ok(matches)
    }
}
