//! Form element

use super::{Metadata, Value, COMPOUND_DELIMITER};
use serde::Serialize;

/// A variant spelling of a sign, introduced by `@form <variant_code> [name]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Form {
    pub variant_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub metadata: Metadata,
    pub values: Vec<Value>,
}

impl Form {
    pub fn is_compound(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.contains(COMPOUND_DELIMITER))
    }

    pub fn unicode_cuneiform(&self) -> Option<&str> {
        self.metadata.unicode.glyph()
    }

    /// What the form's readings project to: its glyph, or its variant code when it has none.
    pub fn display_glyph(&self) -> &str {
        self.unicode_cuneiform().unwrap_or(&self.variant_code)
    }
}
