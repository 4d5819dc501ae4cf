//! Reading-time estimation.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::strip::{count_words, strip_markdown};

/// Average adult reading speed used by [`estimate_reading_time`].
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Estimate reading time in whole minutes.
///
/// Absent or empty input reads as one minute. Markdown syntax is stripped
/// before counting, so fenced code and link targets never add time.
///
/// # Examples
///
/// ```
/// use folio::estimate_reading_time;
///
/// assert_eq!(estimate_reading_time(None), 1);
/// assert_eq!(estimate_reading_time(Some("")), 1);
/// assert_eq!(estimate_reading_time(Some(&"word ".repeat(201))), 2);
/// ```
pub fn estimate_reading_time(text: Option<&str>) -> u32 {
    ReadingTime::measure(text, DEFAULT_WORDS_PER_MINUTE).minutes
}

/// Estimate reading time for an untyped value.
///
/// Only JSON strings are measured; every other value reads as one minute.
pub fn estimate_reading_time_value(value: &Value) -> u32 {
    estimate_reading_time(value.as_str())
}

/// Word count and derived reading time for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadingTime {
    /// Prose words after markdown stripping.
    pub words: usize,
    /// Whole minutes, never below 1.
    pub minutes: u32,
}

impl ReadingTime {
    /// Measure `text` at the given reading speed.
    ///
    /// A `words_per_minute` of 0 falls back to [`DEFAULT_WORDS_PER_MINUTE`].
    pub fn measure(text: Option<&str>, words_per_minute: u32) -> Self {
        let words = match text {
            Some(text) if !text.is_empty() => count_words(&strip_markdown(text)),
            _ => 0,
        };
        Self {
            words,
            minutes: minutes_for(words, words_per_minute),
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// `ceil(words / wpm)`, clamped to at least one minute.
#[allow(clippy::cast_possible_truncation)] // Saturated below
fn minutes_for(words: usize, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let minutes = words.div_ceil(wpm as usize);
    u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
}
