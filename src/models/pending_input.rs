// src/models/pending_input.rs - In-progress form entries
use serde::{Deserialize, Serialize};

/// A form entry that has not been committed to the registry yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingInput {
    /// The long URL to shorten, exactly as typed
    pub long_url: String,

    /// Optional custom shortcode; empty means "generate one"
    pub custom_code: String,

    /// How long the shortened URL stays usable, in minutes
    #[serde(rename = "validity")]
    pub validity_minutes: i64,
}

impl PendingInput {
    pub fn blank(validity_minutes: i64) -> Self {
        Self {
            long_url: String::new(),
            custom_code: String::new(),
            validity_minutes,
        }
    }

    /// Returns a copy with exactly one field replaced
    pub fn with_edit(&self, edit: &InputEdit) -> Self {
        let mut next = self.clone();
        match edit {
            InputEdit::LongUrl(value) => next.long_url = value.clone(),
            InputEdit::CustomCode(value) => next.custom_code = value.clone(),
            InputEdit::Validity(value) => next.validity_minutes = *value,
        }
        next
    }
}

/// A single-field edit of one pending input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum InputEdit {
    LongUrl(String),
    CustomCode(String),
    Validity(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_has_only_validity() {
        let input = PendingInput::blank(30);
        assert!(input.long_url.is_empty());
        assert!(input.custom_code.is_empty());
        assert_eq!(input.validity_minutes, 30);
    }

    #[test]
    fn edit_touches_one_field() {
        let input = PendingInput::blank(30);

        let edited = input.with_edit(&InputEdit::CustomCode("abc1".into()));
        assert_eq!(edited.custom_code, "abc1");
        assert_eq!(edited.long_url, input.long_url);
        assert_eq!(edited.validity_minutes, input.validity_minutes);

        let edited = edited.with_edit(&InputEdit::Validity(0));
        assert_eq!(edited.validity_minutes, 0);
        assert_eq!(edited.custom_code, "abc1");
    }

    #[test]
    fn edit_deserializes_from_field_value_pairs() {
        let edit: InputEdit =
            serde_json::from_str(r#"{"field":"longUrl","value":"https://example.com"}"#).unwrap();
        assert_eq!(edit, InputEdit::LongUrl("https://example.com".into()));

        let edit: InputEdit = serde_json::from_str(r#"{"field":"validity","value":15}"#).unwrap();
        assert_eq!(edit, InputEdit::Validity(15));
    }
}
