//! Prose metrics for markdown content.
//!
//! - `strip`: markdown syntax removal and whitespace normalization
//! - `reading`: word count and reading-time estimation

pub mod reading;
pub mod strip;

pub use reading::{
    DEFAULT_WORDS_PER_MINUTE, ReadingTime, estimate_reading_time, estimate_reading_time_value,
};
pub use strip::{count_words, strip_markdown};
