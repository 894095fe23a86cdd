//! Ancestor scope composition.
//!
//! A node's scope is the root-first, space-joined chain of every ancestor's
//! own scope plus its own. A node that resets scope ends the walk: it still
//! contributes its own scope but nothing above it is consulted.

use crate::page_object::{NodeId, TreeNavigator};

/// Scope prefix derived from `node` and its ancestors
#[must_use]
pub fn scope_chain<T: TreeNavigator>(tree: &T, node: NodeId) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for current in tree.ancestors(node) {
        segments.push(tree.own_scope_of(current).unwrap_or(""));
        if tree.resets_scope(current) {
            break;
        }
    }

    tracing::trace!(node = node.index(), depth = segments.len(), "walked scope chain");

    segments.reverse();
    join_segments(segments)
}

/// Full scope for `node` followed by `target_scope`
#[must_use]
pub fn calculate_scope<T: TreeNavigator>(tree: &T, node: NodeId, target_scope: &str) -> String {
    let chain = scope_chain(tree, node);
    join_segments([chain.as_str(), target_scope])
}

/// Scope of `node` with no explicit target scope
#[must_use]
pub fn full_scope<T: TreeNavigator>(tree: &T, node: NodeId) -> String {
    calculate_scope(tree, node, "")
}

/// Join trimmed, non-empty segments with single spaces
pub(crate) fn join_segments<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
