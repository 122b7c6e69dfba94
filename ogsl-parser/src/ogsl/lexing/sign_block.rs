//! Sign Block Normalization
//!
//! Validates the envelope of a sign block and folds continuation lines.
//!
//! A raw sign block must:
//!
//!     - open with a header of exactly two words (`@sign NAME` or `@sign- NAME`),
//!     - close with the exact line `@end sign`,
//!     - contain no other sign header.
//!
//! Lines that don't start with `@` continue the previous tagged line (notes that wrap across
//! physical lines in the source) and are appended to it, separated by a single space.
use super::block_grouping::Block;
use crate::ogsl::ast::{ErrorKind, ParseError};
use crate::ogsl::token::{is_sign_introducer, SourceLine, SIGN_TERMINATOR, TAG_PREFIX};

/// A validated sign block: header first, terminator last, one logical line per tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignBlock {
    name: String,
    lines: Vec<SourceLine>,
}

impl SignBlock {
    /// Validate and normalize a raw block.
    pub fn from_block(block: Block) -> Result<SignBlock, ParseError> {
        let start = block.start_line();
        let (header, last) = match (block.lines.first(), block.lines.last()) {
            (Some(header), Some(last)) => (header, last),
            _ => {
                return Err(ParseError::new(
                    start,
                    None,
                    ErrorKind::MalformedSignHeader {
                        line: start,
                        content: String::new(),
                    },
                ))
            }
        };

        let words: Vec<&str> = header.text.split_whitespace().collect();
        let name = match words.as_slice() {
            [tag, name] if is_sign_introducer(tag) => name.to_string(),
            _ => {
                return Err(ParseError::new(
                    start,
                    None,
                    ErrorKind::MalformedSignHeader {
                        line: header.number,
                        content: header.text.clone(),
                    },
                ))
            }
        };

        if last.text != SIGN_TERMINATOR {
            return Err(ParseError::new(
                start,
                Some(name),
                ErrorKind::MissingSignTerminator {
                    line: last.number,
                    content: last.text.clone(),
                },
            ));
        }

        let mut lines: Vec<SourceLine> = Vec::with_capacity(block.lines.len());
        for (index, line) in block.lines.into_iter().enumerate() {
            if index > 0 && is_sign_introducer(line.leading_word()) {
                return Err(ParseError::new(
                    start,
                    Some(name),
                    ErrorKind::NestedSignBlock {
                        line: line.number,
                        content: line.text,
                    },
                ));
            }
            match lines.last_mut() {
                Some(previous) if !line.text.starts_with(TAG_PREFIX) => {
                    previous.text.push(' ');
                    previous.text.push_str(&line.text);
                }
                _ => lines.push(line),
            }
        }

        Ok(SignBlock { name, lines })
    }

    /// The sign name from the header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based line number of the header.
    pub fn start_line(&self) -> usize {
        self.header().number
    }

    pub fn header(&self) -> &SourceLine {
        &self.lines[0]
    }

    /// The lines between header and terminator.
    pub fn body(&self) -> &[SourceLine] {
        &self.lines[1..self.lines.len() - 1]
    }
}
