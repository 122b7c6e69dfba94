//! Error types for sign-list parsing
//!
//!     Every error is raised for one sign block and carries enough context for a batch driver to
//!     report it or skip past it: the line the block starts on, the sign name when the header was
//!     readable, and (inside [ErrorKind]) the offending line number and content.
//!
//!     Discarding a sign through `@fake` is not an error; see
//!     [BuildOutcome](crate::ogsl::building::BuildOutcome).

use crate::ogsl::building::ScopeKind;
use crate::ogsl::token::Tag;
use std::fmt;
use thiserror::Error;

/// A parse failure, located at the sign block it occurred in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sign block at line {block_start}{}: {kind}", sign_label(.sign))]
pub struct ParseError {
    /// 1-based line number of the block's first line
    pub block_start: usize,
    /// The sign name, if the header could be read
    pub sign: Option<String>,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(block_start: usize, sign: Option<String>, kind: ErrorKind) -> Self {
        Self {
            block_start,
            sign,
            kind,
        }
    }

    /// Whether this error must abort the whole run regardless of the batch policy.
    pub fn is_fatal_to_parse(&self) -> bool {
        self.kind.is_fatal_to_parse()
    }
}

fn sign_label(sign: &Option<String>) -> String {
    match sign {
        Some(name) => format!(" (sign {})", name),
        None => String::new(),
    }
}

/// What went wrong inside a sign block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("unrecognized tag '{tag}' on line {line}: {content}")]
    UnrecognizedTag {
        tag: String,
        line: usize,
        content: String,
    },

    #[error("malformed sign header on line {line}: expected '@sign NAME', found '{content}'")]
    MalformedSignHeader { line: usize, content: String },

    #[error("missing '@end sign' terminator: block ends on line {line} with '{content}'")]
    MissingSignTerminator { line: usize, content: String },

    #[error("nested sign block on line {line}: {content}")]
    NestedSignBlock { line: usize, content: String },

    #[error("duplicate {field} in {scope} scope on line {line}: {content}")]
    DuplicateField {
        field: Field,
        scope: ScopeKind,
        line: usize,
        content: String,
    },

    #[error("tag {tag} is not allowed in {scope} scope on line {line}: {content}")]
    UnexpectedTagInScope {
        tag: Tag,
        scope: ScopeKind,
        line: usize,
        content: String,
    },

    #[error("tag {tag} on line {line} requires data")]
    MissingData { tag: Tag, line: usize },
}

impl ErrorKind {
    /// Only an unknown tag invalidates the whole document; everything else is local to a block.
    pub fn is_fatal_to_parse(&self) -> bool {
        matches!(self, ErrorKind::UnrecognizedTag { .. })
    }

    /// The source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            ErrorKind::UnrecognizedTag { line, .. }
            | ErrorKind::MalformedSignHeader { line, .. }
            | ErrorKind::MissingSignTerminator { line, .. }
            | ErrorKind::NestedSignBlock { line, .. }
            | ErrorKind::DuplicateField { line, .. }
            | ErrorKind::UnexpectedTagInScope { line, .. }
            | ErrorKind::MissingData { line, .. } => *line,
        }
    }
}

/// Fields that may be assigned at most once per scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Aka,
    PName,
    UnicodeCuneiform,
    UnicodeMap,
    UnicodeName,
    UnicodeNotes,
    UnicodeSequence,
    UnicodeVersion,
    Reference,
}

impl Field {
    /// The tag that assigns this field.
    pub fn tag(&self) -> Tag {
        match self {
            Field::Aka => Tag::Aka,
            Field::PName => Tag::PName,
            Field::UnicodeCuneiform => Tag::UnicodeCuneiform,
            Field::UnicodeMap => Tag::UnicodeMap,
            Field::UnicodeName => Tag::UnicodeName,
            Field::UnicodeNotes => Tag::UnicodeNote,
            Field::UnicodeSequence => Tag::UnicodeSequence,
            Field::UnicodeVersion => Tag::UnicodeAge,
            Field::Reference => Tag::Ref,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Aka => "aka",
            Field::PName => "pname",
            Field::UnicodeCuneiform => "unicode_cuneiform",
            Field::UnicodeMap => "unicode_map",
            Field::UnicodeName => "unicode_name",
            Field::UnicodeNotes => "unicode_notes",
            Field::UnicodeSequence => "unicode_sequence",
            Field::UnicodeVersion => "unicode_version",
            Field::Reference => "reference",
        };
        write!(f, "{} ({})", name, self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_block_sign_and_tag() {
        let err = ParseError::new(
            12,
            Some("AN".to_string()),
            ErrorKind::DuplicateField {
                field: Field::UnicodeCuneiform,
                scope: ScopeKind::Sign,
                line: 15,
                content: "@ucun 𒀭".to_string(),
            },
        );
        let message = err.to_string();
        assert!(message.contains("line 12"));
        assert!(message.contains("sign AN"));
        assert!(message.contains("@ucun"));
        assert!(message.contains("line 15"));
    }

    #[test]
    fn test_display_without_sign_name() {
        let err = ParseError::new(
            3,
            None,
            ErrorKind::MalformedSignHeader {
                line: 3,
                content: "@sign".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "sign block at line 3: malformed sign header on line 3: expected '@sign NAME', found '@sign'"
        );
    }

    #[test]
    fn test_only_unrecognized_tag_is_fatal() {
        let unknown = ErrorKind::UnrecognizedTag {
            tag: "@bogus".to_string(),
            line: 4,
            content: "@bogus x".to_string(),
        };
        let nested = ErrorKind::NestedSignBlock {
            line: 4,
            content: "@sign B".to_string(),
        };
        assert!(unknown.is_fatal_to_parse());
        assert!(!nested.is_fatal_to_parse());
        assert_eq!(nested.line(), 4);
    }
}
