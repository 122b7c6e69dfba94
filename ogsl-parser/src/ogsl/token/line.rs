//! Line types shared by lexing and building
//!
//!     A [SourceLine] is one logical line of the document: trimmed, tab-normalized, and tagged
//!     with the 1-based number of the physical line it started on. Continuation folding keeps
//!     the number of the first physical line, so diagnostics always point at the tag.
//!
//!     A [TagLine] is a source line after tokenization: the tag and its (possibly empty) data.

use super::Tag;

/// One numbered line of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the original document
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The text up to the first space (the whole line if there is none).
    pub fn leading_word(&self) -> &str {
        self.text.split(' ').next().unwrap_or_default()
    }
}

/// A tokenized line: its tag and the data that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine {
    pub tag: Tag,
    pub data: String,
    pub number: usize,
}
