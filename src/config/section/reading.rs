//! `[reading]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::text::DEFAULT_WORDS_PER_MINUTE;
use serde::{Deserialize, Serialize};

/// Reading-time estimation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Words read per minute.
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl ReadingConfig {
    pub const WORDS_PER_MINUTE: FieldPath = FieldPath::new("reading.words_per_minute");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.words_per_minute == 0 {
            diag.error_with_hint(
                Self::WORDS_PER_MINUTE,
                "must be greater than 0",
                format!("remove the field to use the default of {DEFAULT_WORDS_PER_MINUTE}"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.reading.words_per_minute, 200);
    }

    #[test]
    fn test_custom_rate() {
        let config = test_parse_config("[reading]\nwords_per_minute = 250");
        assert_eq!(config.reading.words_per_minute, 250);
    }

    #[test]
    fn test_zero_rate_is_error() {
        let config = test_parse_config("[reading]\nwords_per_minute = 0");
        let mut diag = ConfigDiagnostics::new();
        config.reading.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, ReadingConfig::WORDS_PER_MINUTE);
    }
}
