//! Probar Scope: Page Object Element Resolution
//!
//! Resolves a logical element reference ("this element, inside this
//! component, inside this page") into a single selector string, then into the
//! matched elements, with actionable errors when nothing or too much matches.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Element Resolution Pipeline                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Scope      │    │ Selector   │    │ Element    │            │
//! │   │ Chain      │───►│ Builder    │───►│ Finder     │───► DOM    │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! │         ▲                 ▲                 │                   │
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Page Tree  │    │ Filters    │    │ Breadcrumb │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

mod config;
/// DOM query collaborator and match sets
pub mod dom;
mod diagnostics;
mod filter;
mod finder;
mod options;
/// Page object tree and its read-only navigator
pub mod page_object;
mod result;
mod scope;
mod selector;
/// Text helpers
pub mod text;

pub use config::{FinderConfig, DEFAULT_ROOT_LABEL};
pub use diagnostics::{describe_path, guard_multiple};
pub use dom::{Element, MatchSet, QueryContext, QueryRecord, StaticDocument};
pub use filter::filter_suffix;
pub use finder::{find_test_context, ElementFinder};
pub use options::FindOptions;
pub use page_object::{Ancestors, NodeId, PageNode, PageTree, TreeNavigator};
pub use result::{ScopeError, ScopeResult};
pub use scope::{calculate_scope, full_scope, scope_chain};
pub use selector::build_selector;
pub use text::{normalize_text, normalized_texts};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::config::*;
    pub use super::diagnostics::*;
    pub use super::dom::*;
    pub use super::filter::*;
    pub use super::finder::*;
    pub use super::options::*;
    pub use super::page_object::*;
    pub use super::result::*;
    pub use super::scope::*;
    pub use super::selector::*;
    pub use super::text::*;
}
