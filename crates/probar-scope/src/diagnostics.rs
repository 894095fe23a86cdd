//! Breadcrumb paths and match-count guards for error reporting.

use crate::dom::MatchSet;
use crate::options::FindOptions;
use crate::page_object::{NodeId, TreeNavigator};
use crate::result::{ScopeError, ScopeResult};

/// Dotted, root-first path of `node`, e.g. `page.section.button`.
///
/// The root is always reported as `root_label`. `page_object_key` names the
/// originating node when the tree has no key recorded for it; on the root it
/// is appended after the root label.
#[must_use]
pub fn describe_path<T: TreeNavigator>(
    tree: &T,
    node: NodeId,
    page_object_key: Option<&str>,
    root_label: &str,
) -> String {
    let mut labels: Vec<&str> = Vec::new();

    for current in tree.ancestors(node) {
        let is_origin = current == node;
        if tree.parent_of(current).is_none() {
            if is_origin {
                labels.extend(page_object_key);
            }
            labels.push(root_label);
            break;
        }

        let key = tree
            .metadata_key_of(current)
            .or(if is_origin { page_object_key } else { None });
        labels.extend(key);
    }

    labels.reverse();
    labels.join(".")
}

/// Fail when more than one element matched and `multiple` was not requested.
///
/// `path` is only evaluated on failure.
pub fn guard_multiple<F>(
    selector: &str,
    matches: &MatchSet,
    options: &FindOptions,
    path: F,
) -> ScopeResult<()>
where
    F: FnOnce() -> String,
{
    if matches.len() > 1 && !options.multiple {
        return Err(ScopeError::MultipleMatches {
            selector: selector.to_string(),
            path: path(),
            count: matches.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::page_object::{PageNode, PageTree};

    mod describe_path_tests {
        use super::*;

        #[test]
        fn test_nested_path() {
            let mut tree = PageTree::new(PageNode::new().with_key("root"));
            let section = tree.attach(tree.root(), PageNode::new().with_key("section"));
            let button = tree.attach(section, PageNode::new().with_key("button"));
            assert_eq!(
                describe_path(&tree, button, None, "page"),
                "page.section.button"
            );
        }

        #[test]
        fn test_root_key_replaced() {
            let tree = PageTree::new(PageNode::new().with_key("ignored"));
            assert_eq!(describe_path(&tree, tree.root(), None, "page"), "page");
        }

        #[test]
        fn test_page_object_key_fills_missing_key() {
            let mut tree = PageTree::new(PageNode::new());
            let form = tree.attach(tree.root(), PageNode::new().with_key("form"));
            let submit = tree.attach(form, PageNode::new());
            assert_eq!(
                describe_path(&tree, submit, Some("submit"), "page"),
                "page.form.submit"
            );
        }

        #[test]
        fn test_recorded_key_wins_over_page_object_key() {
            let mut tree = PageTree::new(PageNode::new());
            let form = tree.attach(tree.root(), PageNode::new().with_key("form"));
            assert_eq!(
                describe_path(&tree, form, Some("other"), "page"),
                "page.form"
            );
        }

        #[test]
        fn test_page_object_key_on_root() {
            let tree = PageTree::new(PageNode::new());
            assert_eq!(
                describe_path(&tree, tree.root(), Some("title"), "page"),
                "page.title"
            );
        }

        #[test]
        fn test_custom_root_label() {
            let mut tree = PageTree::new(PageNode::new());
            let nav = tree.attach(tree.root(), PageNode::new().with_key("nav"));
            assert_eq!(describe_path(&tree, nav, None, "app"), "app.nav");
        }

        #[test]
        fn test_keyless_intermediate_skipped() {
            let mut tree = PageTree::new(PageNode::new());
            let anon = tree.attach(tree.root(), PageNode::new());
            let leaf = tree.attach(anon, PageNode::new().with_key("leaf"));
            assert_eq!(describe_path(&tree, leaf, None, "page"), "page.leaf");
        }
    }

    mod guard_tests {
        use super::*;

        fn two() -> MatchSet {
            MatchSet::from(vec![Element::new("a"), Element::new("b")])
        }

        #[test]
        fn test_single_passes() {
            let set = MatchSet::from(vec![Element::new("a")]);
            assert!(guard_multiple("a", &set, &FindOptions::default(), String::new).is_ok());
        }

        #[test]
        fn test_empty_passes() {
            assert!(
                guard_multiple("a", &MatchSet::empty(), &FindOptions::default(), String::new)
                    .is_ok()
            );
        }

        #[test]
        fn test_two_fail() {
            let err = guard_multiple("li", &two(), &FindOptions::default(), || {
                "page.items".to_string()
            })
            .unwrap_err();
            match err {
                ScopeError::MultipleMatches {
                    selector,
                    path,
                    count,
                } => {
                    assert_eq!(selector, "li");
                    assert_eq!(path, "page.items");
                    assert_eq!(count, 2);
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn test_two_allowed_with_multiple() {
            let opts = FindOptions::new().multiple(true);
            assert!(guard_multiple("li", &two(), &opts, String::new).is_ok());
        }
    }
}
