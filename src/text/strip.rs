//! Markdown-to-prose normalization.
//!
//! Removes the markdown syntax that would otherwise inflate a word count:
//!
//! | Syntax              | Result                         |
//! |---------------------|--------------------------------|
//! | ```` ```fenced``` ```` | removed with its content    |
//! | `` `inline` ``      | removed with its content       |
//! | `[label](target)`   | `label`                        |
//! | `#` `*` `_` `~`     | removed, enclosed text kept    |
//! | whitespace runs     | single space, trimmed          |

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static RE_FENCED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]*`").unwrap());
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());
static RE_FORMATTING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[#*_~]").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip markdown syntax, leaving plain prose separated by single spaces.
///
/// Order matters: code is removed before links and emphasis so that
/// `` `[a](b)` `` or `` `**kwargs` `` inside code never leak into the prose.
pub fn strip_markdown(text: &str) -> String {
    let text = RE_FENCED.replace_all(text, "");
    let text = RE_INLINE_CODE.replace_all(&text, "");
    let text = RE_LINK.replace_all(&text, "$1");
    let text = RE_FORMATTING.replace_all(&text, "");
    collapse_whitespace(&text).into_owned()
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim();
    if !trimmed.contains(|c: char| c.is_whitespace() && c != ' ') && !trimmed.contains("  ") {
        return Cow::Borrowed(trimmed);
    }
    RE_WHITESPACE.replace_all(trimmed, " ")
}

/// Count whitespace-separated tokens.
#[inline]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
