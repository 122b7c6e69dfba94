//! Descriptive fields shared by signs and forms

use serde::Serialize;

/// The six Unicode descriptor fields. Each may be set at most once per scope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UnicodeInfo {
    /// The glyph itself (`@ucun`)
    pub cuneiform: Option<String>,
    /// Codepoint map (`@umap`)
    pub map: Option<String>,
    /// Canonical Unicode name (`@uname`)
    pub name: Option<String>,
    pub notes: Option<String>,
    pub sequence: Option<String>,
    /// Unicode version/age (`@uage`)
    pub version: Option<String>,
}

impl UnicodeInfo {
    /// The glyph, if one was given and it isn't empty.
    pub fn glyph(&self) -> Option<&str> {
        self.cuneiform.as_deref().filter(|glyph| !glyph.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Metadata {
    /// "Also known as" alias (`@aka`)
    pub aka: Option<String>,
    /// Normalized, parenthesis-free name (`@pname`), e.g. `|UR₂×A+NA|` for `UR₂×(A.NA)`
    pub pname: Option<String>,
    pub literature: Vec<String>,
    pub references: Vec<String>,
    pub notes: Vec<String>,
    pub internal_notes: Vec<String>,
    pub sign_lists: Vec<String>,
    pub system: Vec<String>,
    pub unicode: UnicodeInfo,
}
