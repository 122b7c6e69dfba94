//! Value element
//!
//!     A value is one reading of a sign or form. The reading text has any trailing `?` removed;
//!     the question mark survives as [Value::is_questionable].

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Value {
    pub text: String,
    pub is_questionable: bool,
    pub is_deprecated: bool,
    /// Language restriction, from a `%lang` prefix on the value line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub literature: Vec<String>,
    pub notes: Vec<String>,
    pub internal_notes: Vec<String>,
    pub system: Vec<String>,
}

impl Value {
    /// Build a bare value from reading text, normalizing a trailing `?`.
    pub fn new(reading: &str, is_deprecated: bool) -> Self {
        let (text, is_questionable) = match reading.strip_suffix('?') {
            Some(stripped) => (stripped, true),
            None => (reading, false),
        };
        Self {
            text: text.to_string(),
            is_questionable,
            is_deprecated,
            ..Default::default()
        }
    }
}
