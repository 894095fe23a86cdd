//! Pseudo-selector filter suffix.
//!
//! Filters are appended directly to the target fragment, in a fixed order:
//! text content first, then either an index or a last-match filter.

use crate::options::FindOptions;

/// Trailing filter suffix for `options`, empty when no filter is set
#[must_use]
pub fn filter_suffix(options: &FindOptions) -> String {
    let mut suffix = String::new();

    if let Some(text) = options.contains.as_deref().filter(|t| !t.is_empty()) {
        suffix.push_str(&contains_filter(text));
    }

    if let Some(index) = options.at {
        suffix.push_str(&format!(":eq({index})"));
    } else if options.last {
        suffix.push_str(":last");
    }

    suffix
}

/// `:contains("...")` with quotes and backslashes escaped
fn contains_filter(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!(":contains(\"{escaped}\")")
}
