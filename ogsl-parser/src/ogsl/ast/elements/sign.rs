//! Sign element
//!
//!     The top-level entity, one per sign block. Values listed before the first `@form` line
//!     belong to the sign itself; everything after a `@form` line belongs to that form.

use super::{Form, Metadata, Value, COMPOUND_DELIMITER};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sign {
    pub name: String,
    pub is_deprecated: bool,
    #[serde(flatten)]
    pub metadata: Metadata,
    pub forms: Vec<Form>,
    pub values: Vec<Value>,
}

impl Sign {
    pub fn is_compound(&self) -> bool {
        self.name.contains(COMPOUND_DELIMITER)
    }

    pub fn unicode_cuneiform(&self) -> Option<&str> {
        self.metadata.unicode.glyph()
    }

    /// What the sign's readings project to: its glyph, or its name when it has none.
    pub fn display_glyph(&self) -> &str {
        self.unicode_cuneiform().unwrap_or(&self.name)
    }
}
