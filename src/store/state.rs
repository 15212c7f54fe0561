use serde::Serialize;

use crate::models::{PendingInput, ShortenedRecord};
use crate::utils::DEFAULT_CODE_LENGTH;

/// Limits and defaults the transitions run with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenerSettings {
    pub max_pending_inputs: usize,
    pub default_validity_minutes: i64,
    pub shortcode_length: usize,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            max_pending_inputs: 5,
            default_validity_minutes: 30,
            shortcode_length: DEFAULT_CODE_LENGTH,
        }
    }
}

/// Everything the session knows: the form, the registry and the error banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub pending_inputs: Vec<PendingInput>,
    pub records: Vec<ShortenedRecord>,
    pub error: Option<String>,
}

impl SessionState {
    pub fn new(settings: &ShortenerSettings) -> Self {
        Self {
            pending_inputs: vec![PendingInput::blank(settings.default_validity_minutes)],
            records: Vec::new(),
            error: None,
        }
    }

    /// First record registered under `shortcode`, with its position
    pub fn find_record(&self, shortcode: &str) -> Option<(usize, &ShortenedRecord)> {
        self.records
            .iter()
            .enumerate()
            .find(|(_, record)| record.shortcode() == shortcode)
    }
}
