//! Block Grouping
//!
//! Splits a document's lines into blank-line-delimited blocks and separates the sign blocks
//! from everything else (list definitions, system definitions, and so on).
use crate::ogsl::token::{is_sign_introducer, SourceLine};
use serde::Serialize;
use std::collections::BTreeSet;

/// A maximal run of non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub lines: Vec<SourceLine>,
}

impl Block {
    /// 1-based line number of the block's first line.
    pub fn start_line(&self) -> usize {
        self.lines.first().map_or(0, |line| line.number)
    }

    /// The leading word of the block's first line, which decides what kind of block it is.
    pub fn leading_tag(&self) -> &str {
        self.lines.first().map_or("", |line| line.leading_word())
    }

    pub fn is_sign_block(&self) -> bool {
        is_sign_introducer(self.leading_tag())
    }
}

/// What segmentation saw, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SegmentReport {
    pub total_blocks: usize,
    pub sign_blocks: usize,
    /// Leading tags of the blocks that were skipped
    pub other_block_types: BTreeSet<String>,
}

/// Group lines into blocks. Blank lines terminate blocks and belong to none.
pub fn group_into_blocks<I>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = SourceLine>,
{
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in lines {
        if line.is_blank() {
            if !current.is_empty() {
                blocks.push(Block {
                    lines: std::mem::take(&mut current),
                });
            }
            continue;
        }
        current.push(line);
    }
    // Input that doesn't end with a blank line
    if !current.is_empty() {
        blocks.push(Block { lines: current });
    }
    blocks
}

/// Keep the sign blocks, and report on the rest.
pub fn select_sign_blocks(blocks: Vec<Block>) -> (Vec<Block>, SegmentReport) {
    let mut report = SegmentReport {
        total_blocks: blocks.len(),
        ..Default::default()
    };
    let mut sign_blocks = Vec::new();
    for block in blocks {
        if block.is_sign_block() {
            sign_blocks.push(block);
        } else {
            report.other_block_types.insert(block.leading_tag().to_string());
        }
    }
    report.sign_blocks = sign_blocks.len();
    (sign_blocks, report)
}
