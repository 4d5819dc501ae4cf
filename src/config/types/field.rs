//! Dotted config field path used in diagnostics.

/// Path of a field inside `folio.toml`, e.g. `reading.words_per_minute`.
///
/// Sections expose their field paths as associated consts so diagnostics
/// never spell a path by hand:
///
/// ```ignore
/// diag.error(ReadingConfig::WORDS_PER_MINUTE, "must be greater than 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
