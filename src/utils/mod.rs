//! Small shared helpers.

pub mod path;

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "article")` -> `"0 articles"`
/// - `plural_count(1, "article")` -> `"1 article"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
