//! Lexing
//!
//!     Turns document text into numbered lines, lines into blocks, and blocks into validated
//!     sign blocks. Tag lookup happens here too, one line at a time.
//!
//!     The stages are:
//!
//!         1. [source_lines]: split text into trimmed, tab-normalized [SourceLine]s.
//!         2. [block_grouping]: split lines into blank-line-delimited blocks and pick the sign
//!            blocks out of them.
//!         3. [sign_block]: check a sign block's envelope and fold continuation lines.
//!         4. [tokenize_line]: split a logical line into tag and data.

pub mod block_grouping;
pub mod sign_block;

use crate::ogsl::ast::ErrorKind;
use crate::ogsl::token::{SourceLine, Tag, TagLine};

pub use block_grouping::{group_into_blocks, select_sign_blocks, Block, SegmentReport};
pub use sign_block::SignBlock;

/// Split document text into numbered lines.
///
/// Tabs become single spaces and surrounding whitespace is trimmed. Blank lines are kept, since
/// they delimit blocks.
pub fn source_lines(source: &str) -> Vec<SourceLine> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| SourceLine::new(index + 1, line.replace('\t', " ").trim()))
        .collect()
}

/// Split a line on its first space into tag and data, and look the tag up.
pub fn tokenize_line(line: &SourceLine) -> Result<TagLine, ErrorKind> {
    let (word, data) = line.text.split_once(' ').unwrap_or((line.text.as_str(), ""));
    let tag = Tag::lookup(word).ok_or_else(|| ErrorKind::UnrecognizedTag {
        tag: word.to_string(),
        line: line.number,
        content: line.text.clone(),
    })?;
    Ok(TagLine {
        tag,
        data: data.to_string(),
        number: line.number,
    })
}
