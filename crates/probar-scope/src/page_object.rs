//! Page Object Tree
//!
//! Page objects are described as a tree: a page owns components, components
//! own nested components and elements. The resolver only ever reads this tree
//! through [`TreeNavigator`].
//!
//! [`PageTree`] is an arena: the tree owns every node, and each node keeps a
//! non-owning back-reference ([`NodeId`]) to its parent.

use std::fmt;
use std::sync::Arc;

use crate::dom::QueryContext;

/// Handle to a node in a page object tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Read-only view of a page object tree
pub trait TreeNavigator {
    /// Parent of `node`, `None` for the root
    fn parent_of(&self, node: NodeId) -> Option<NodeId>;

    /// Property key the node was recorded under, if any
    fn metadata_key_of(&self, node: NodeId) -> Option<&str>;

    /// Scope selector declared on the node itself
    fn own_scope_of(&self, node: NodeId) -> Option<&str>;

    /// Whether the node stops the ancestor scope walk
    fn resets_scope(&self, node: NodeId) -> bool;

    /// Query context attached to the node (only meaningful on the root)
    fn context_of(&self, node: NodeId) -> Option<&dyn QueryContext>;

    /// Walk from `node` up to the root, `node` first
    fn ancestors(&self, node: NodeId) -> Ancestors<'_, Self>
    where
        Self: Sized,
    {
        Ancestors {
            tree: self,
            next: Some(node),
        }
    }

    /// The root of the tree `node` belongs to
    fn root_of(&self, node: NodeId) -> NodeId
    where
        Self: Sized,
    {
        self.ancestors(node).last().unwrap_or(node)
    }
}

/// Iterator over a node and its ancestors
pub struct Ancestors<'a, T: TreeNavigator> {
    tree: &'a T,
    next: Option<NodeId>,
}

impl<T: TreeNavigator> Iterator for Ancestors<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent_of(current);
        Some(current)
    }
}

impl<T: TreeNavigator> fmt::Debug for Ancestors<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ancestors").field("next", &self.next).finish()
    }
}

/// Definition of a single page object node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageNode {
    key: Option<String>,
    scope: Option<String>,
    reset_scope: bool,
}

impl PageNode {
    /// Create a node with no scope and no key
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node with a scope selector
    #[must_use]
    pub fn scoped(scope: impl Into<String>) -> Self {
        Self::new().with_scope(scope)
    }

    /// Set the scope selector
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the metadata key
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Stop the ancestor scope walk at this node
    #[must_use]
    pub fn with_reset_scope(mut self, reset: bool) -> Self {
        self.reset_scope = reset;
        self
    }
}

#[derive(Debug)]
struct Slot {
    node: PageNode,
    parent: Option<NodeId>,
}

/// Arena-backed page object tree
#[derive(Debug)]
pub struct PageTree {
    slots: Vec<Slot>,
    context: Option<Arc<dyn QueryContext>>,
}

impl PageTree {
    /// Create a tree from its root node
    #[must_use]
    pub fn new(root: PageNode) -> Self {
        Self {
            slots: vec![Slot { node: root, parent: None }],
            context: None,
        }
    }

    /// Create a tree whose root carries a test context
    #[must_use]
    pub fn with_context(root: PageNode, context: Arc<dyn QueryContext>) -> Self {
        Self {
            context: Some(context),
            ..Self::new(root)
        }
    }

    /// The root node
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach `node` as a child of `parent`
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree
    pub fn attach(&mut self, parent: NodeId, node: PageNode) -> NodeId {
        assert!(
            parent.0 < self.slots.len(),
            "parent {parent:?} is not part of this tree"
        );
        self.slots.push(Slot {
            node,
            parent: Some(parent),
        });
        NodeId(self.slots.len() - 1)
    }

    /// Number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// A tree always has its root
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Node definition behind a handle
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&PageNode> {
        self.slots.get(id.0).map(|slot| &slot.node)
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.0)
    }
}

impl TreeNavigator for PageTree {
    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.slot(node).and_then(|slot| slot.parent)
    }

    fn metadata_key_of(&self, node: NodeId) -> Option<&str> {
        self.slot(node).and_then(|slot| slot.node.key.as_deref())
    }

    fn own_scope_of(&self, node: NodeId) -> Option<&str> {
        self.slot(node).and_then(|slot| slot.node.scope.as_deref())
    }

    fn resets_scope(&self, node: NodeId) -> bool {
        self.slot(node).is_some_and(|slot| slot.node.reset_scope)
    }

    fn context_of(&self, node: NodeId) -> Option<&dyn QueryContext> {
        if node == self.root() {
            self.context.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::StaticDocument;

    fn sample_tree() -> (PageTree, NodeId, NodeId) {
        let mut tree = PageTree::new(PageNode::new());
        let section = tree.attach(tree.root(), PageNode::scoped(".section").with_key("section"));
        let button = tree.attach(section, PageNode::scoped(".button").with_key("button"));
        (tree, section, button)
    }

    mod page_node_tests {
        use super::*;

        #[test]
        fn test_builder() {
            let node = PageNode::scoped(".a").with_key("a").with_reset_scope(true);
            assert_eq!(node.scope.as_deref(), Some(".a"));
            assert_eq!(node.key.as_deref(), Some("a"));
            assert!(node.reset_scope);
        }

        #[test]
        fn test_default_is_blank() {
            let node = PageNode::default();
            assert!(node.scope.is_none());
            assert!(node.key.is_none());
            assert!(!node.reset_scope);
        }
    }

    mod navigator_tests {
        use super::*;

        #[test]
        fn test_parent_links() {
            let (tree, section, button) = sample_tree();
            assert_eq!(tree.parent_of(button), Some(section));
            assert_eq!(tree.parent_of(section), Some(tree.root()));
            assert_eq!(tree.parent_of(tree.root()), None);
            assert_eq!(tree.len(), 3);
        }

        #[test]
        fn test_metadata() {
            let (tree, section, button) = sample_tree();
            assert_eq!(tree.metadata_key_of(section), Some("section"));
            assert_eq!(tree.own_scope_of(button), Some(".button"));
            assert_eq!(tree.metadata_key_of(tree.root()), None);
            assert!(!tree.resets_scope(button));
        }

        #[test]
        fn test_ancestors_leaf_first() {
            let (tree, section, button) = sample_tree();
            let chain: Vec<NodeId> = tree.ancestors(button).collect();
            assert_eq!(chain, vec![button, section, tree.root()]);
            assert_eq!(tree.root_of(button), tree.root());
        }

        #[test]
        fn test_unknown_handle_reads_as_blank() {
            let (tree, _, _) = sample_tree();
            let stray = NodeId(99);
            assert_eq!(tree.parent_of(stray), None);
            assert_eq!(tree.own_scope_of(stray), None);
            assert!(!tree.resets_scope(stray));
        }

        #[test]
        #[should_panic(expected = "is not part of this tree")]
        fn test_attach_to_unknown_parent_panics() {
            let mut tree = PageTree::new(PageNode::new());
            let _ = tree.attach(NodeId(5), PageNode::new());
        }
    }

    mod context_tests {
        use super::*;

        #[test]
        fn test_context_only_on_root() {
            let mut tree =
                PageTree::with_context(PageNode::new(), Arc::new(StaticDocument::new()));
            let child = tree.attach(tree.root(), PageNode::new());
            assert!(tree.context_of(tree.root()).is_some());
            assert!(tree.context_of(child).is_none());
        }

        #[test]
        fn test_no_context() {
            let tree = PageTree::new(PageNode::new());
            assert!(tree.context_of(tree.root()).is_none());
        }
    }
}
