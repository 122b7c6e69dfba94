//! Token definitions for the sign-list format
//!
//!     Every meaningful line of a sign list starts with a tag: an `@`-prefixed word drawn from a
//!     fixed table. The table is defined with the logos derive macro, so looking a tag up is a
//!     matter of lexing it and checking that a single token covers the whole word.
//!
//!     Lines themselves are represented by [SourceLine] (raw, numbered text) and [TagLine]
//!     (a tokenized line: tag plus data payload). See [line] for both.

pub mod line;

use logos::Logos;
use serde::Serialize;
use std::fmt;

pub use line::{SourceLine, TagLine};

/// The character every tagged line starts with. Lines without it are continuations.
pub const TAG_PREFIX: char = '@';

/// The exact text of the line that closes a sign block.
pub const SIGN_TERMINATOR: &str = "@end sign";

/// All tags recognized by the sign-list format
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    #[token("@sign")]
    Sign,
    #[token("@sign-")]
    SignDeprecated,
    #[token("@end")]
    End,
    #[token("@form")]
    Form,
    #[token("@v")]
    Value,
    #[token("@v-")]
    ValueDeprecated,
    #[token("@aka")]
    Aka,
    #[token("@pname")]
    PName,
    #[token("@note")]
    Note,
    #[token("@inote")]
    InternalNote,
    #[token("@lit")]
    Lit,
    #[token("@ref")]
    Ref,
    #[token("@sys")]
    Sys,
    #[token("@list")]
    SignList,
    #[token("@uage")]
    UnicodeAge,
    #[token("@ucun")]
    UnicodeCuneiform,
    #[token("@umap")]
    UnicodeMap,
    #[token("@uname")]
    UnicodeName,
    #[token("@unote")]
    UnicodeNote,
    #[token("@useq")]
    UnicodeSequence,
    #[token("@fake")]
    Fake,
    #[token("@@")]
    Separator,
}

impl Tag {
    /// Look up a tag by its exact text.
    ///
    /// Returns `None` unless the whole string is one tag from the table, so `@lits` or
    /// `@sign+` are rejected rather than matched by prefix.
    pub fn lookup(text: &str) -> Option<Tag> {
        let mut lexer = Tag::lexer(text);
        let tag = match lexer.next() {
            Some(Ok(tag)) => tag,
            _ => return None,
        };
        if lexer.span() != (0..text.len()) {
            return None;
        }
        Some(tag)
    }

    /// The tag as it appears in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Sign => "@sign",
            Tag::SignDeprecated => "@sign-",
            Tag::End => "@end",
            Tag::Form => "@form",
            Tag::Value => "@v",
            Tag::ValueDeprecated => "@v-",
            Tag::Aka => "@aka",
            Tag::PName => "@pname",
            Tag::Note => "@note",
            Tag::InternalNote => "@inote",
            Tag::Lit => "@lit",
            Tag::Ref => "@ref",
            Tag::Sys => "@sys",
            Tag::SignList => "@list",
            Tag::UnicodeAge => "@uage",
            Tag::UnicodeCuneiform => "@ucun",
            Tag::UnicodeMap => "@umap",
            Tag::UnicodeName => "@uname",
            Tag::UnicodeNote => "@unote",
            Tag::UnicodeSequence => "@useq",
            Tag::Fake => "@fake",
            Tag::Separator => "@@",
        }
    }

    /// True for `@sign` and `@sign-`.
    pub fn opens_sign(&self) -> bool {
        matches!(self, Tag::Sign | Tag::SignDeprecated)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether the raw leading word of a line introduces a sign block.
///
/// Used by block segmentation, which has to classify blocks before any tag lookup happens
/// (non-sign blocks may use tags outside the table).
pub fn is_sign_introducer(word: &str) -> bool {
    word == Tag::Sign.as_str() || word == Tag::SignDeprecated.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_tags() {
        assert_eq!(Tag::lookup("@sign"), Some(Tag::Sign));
        assert_eq!(Tag::lookup("@sign-"), Some(Tag::SignDeprecated));
        assert_eq!(Tag::lookup("@v"), Some(Tag::Value));
        assert_eq!(Tag::lookup("@v-"), Some(Tag::ValueDeprecated));
        assert_eq!(Tag::lookup("@@"), Some(Tag::Separator));
        assert_eq!(Tag::lookup("@unote"), Some(Tag::UnicodeNote));
    }

    #[test]
    fn test_lookup_rejects_partial_matches() {
        assert_eq!(Tag::lookup("@lits"), None);
        assert_eq!(Tag::lookup("@sign+"), None);
        assert_eq!(Tag::lookup("@listdef"), None);
        assert_eq!(Tag::lookup("x@v"), None);
        assert_eq!(Tag::lookup("@"), None);
        assert_eq!(Tag::lookup(""), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Tag::lookup("@SIGN"), None);
        assert_eq!(Tag::lookup("@Ucun"), None);
    }

    #[test]
    fn test_as_str_round_trips_through_lookup() {
        for tag in [Tag::Sign, Tag::End, Tag::Form, Tag::SignList, Tag::UnicodeAge, Tag::Fake] {
            assert_eq!(Tag::lookup(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_is_sign_introducer() {
        assert!(is_sign_introducer("@sign"));
        assert!(is_sign_introducer("@sign-"));
        assert!(!is_sign_introducer("@signlist"));
        assert!(!is_sign_introducer("@form"));
    }
}
