//! Text helpers: identifier slugs and bounded value representations.

use serde_json::Value;

/// Maximum number of characters [`bounded_repr`] keeps before truncating.
pub const MAX_REPR_CHARS: usize = 400;

/// Marker appended to a truncated representation.
pub const ELLIPSIS: &str = "...";

/// Make a filesystem- and identifier-safe slug from `text`.
///
/// Lowercases the input, replaces every run of characters outside
/// `[a-z0-9_]` with a single `_`, collapses repeated underscores and strips
/// leading/trailing underscores. The result may be empty.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        let ch = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            ch
        } else {
            '_'
        };
        if ch == '_' && slug.ends_with('_') {
            continue;
        }
        slug.push(ch);
    }
    slug.trim_matches('_').to_string()
}

/// Compact textual form of `value`, truncated to [`MAX_REPR_CHARS`]
/// characters plus [`ELLIPSIS`] when longer.
#[must_use]
pub fn bounded_repr(value: &Value) -> String {
    bound(value.to_string())
}

fn bound(repr: String) -> String {
    match repr.char_indices().nth(MAX_REPR_CHARS) {
        Some((cut, _)) => {
            let mut truncated = repr[..cut].to_string();
            truncated.push_str(ELLIPSIS);
            truncated
        }
        None => repr,
    }
}
