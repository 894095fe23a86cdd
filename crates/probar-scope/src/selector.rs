//! Final selector composition.

use crate::filter::filter_suffix;
use crate::options::FindOptions;
use crate::page_object::{NodeId, TreeNavigator};
use crate::scope::{calculate_scope, join_segments};

/// Build the selector for `target` under `node`.
///
/// Scope and target are space-joined; the filter suffix is glued to the
/// target with no space. With `options.reset_scope` the explicit scope is
/// used as-is and the ancestor chain is never read.
#[must_use]
pub fn build_selector<T: TreeNavigator>(
    tree: &T,
    node: NodeId,
    target: &str,
    options: &FindOptions,
) -> String {
    let scope = if options.reset_scope {
        options.scope_or_empty().to_string()
    } else {
        calculate_scope(tree, node, options.scope_or_empty())
    };

    let fragment = format!("{}{}", target.trim(), filter_suffix(options));
    join_segments([scope.as_str(), fragment.as_str()])
}
