//! Batch driver
//!
//!     Runs the whole pipeline over one document: source lines → blocks → sign blocks → signs.
//!
//!     Each sign block either yields one sign, yields nothing (`@fake`), or fails. What a failure
//!     does is decided by [BlockErrorPolicy]: abort the run, or skip the block and keep going.
//!     An unrecognized tag aborts the run under either policy.

use crate::ogsl::ast::{ParseError, Sign};
use crate::ogsl::building::{build_sign, BuildOutcome};
use crate::ogsl::lexing::{
    group_into_blocks, select_sign_blocks, source_lines, SegmentReport, SignBlock,
};
use crate::ogsl::projection::{project, ReadingMap};
use crate::ogsl::token::SourceLine;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// What to do when a sign block fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockErrorPolicy {
    /// Fail the whole run with the first error.
    #[default]
    Abort,
    /// Record the error, drop the block, and continue.
    Skip,
}

/// The parsed contents of a sign-list document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SignList {
    pub signs: Vec<Sign>,
    pub report: SegmentReport,
    /// Number of sign blocks dropped by `@fake`
    pub discarded: usize,
    /// Block errors tolerated under [BlockErrorPolicy::Skip]
    #[serde(skip)]
    pub skipped: Vec<ParseError>,
}

/// Counts over a parsed sign list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SignListStats {
    pub signs: usize,
    pub with_cuneiform: usize,
    pub without_cuneiform: usize,
    pub forms: usize,
    pub values: usize,
}

impl SignList {
    /// Project the signs into a reading → glyph mapping.
    pub fn project(&self) -> ReadingMap {
        project(&self.signs)
    }

    pub fn stats(&self) -> SignListStats {
        let with_cuneiform = self
            .signs
            .iter()
            .filter(|sign| sign.unicode_cuneiform().is_some())
            .count();
        let forms = self.signs.iter().map(|sign| sign.forms.len()).sum();
        let values = self
            .signs
            .iter()
            .map(|sign| {
                sign.values.len() + sign.forms.iter().map(|f| f.values.len()).sum::<usize>()
            })
            .sum();
        SignListStats {
            signs: self.signs.len(),
            with_cuneiform,
            without_cuneiform: self.signs.len() - with_cuneiform,
            forms,
            values,
        }
    }
}

/// Parse a whole document, aborting on the first error.
pub fn parse_document(source: &str) -> Result<SignList, ParseError> {
    parse_document_with(source, BlockErrorPolicy::Abort)
}

/// Parse a whole document with the given block error policy.
pub fn parse_document_with(
    source: &str,
    policy: BlockErrorPolicy,
) -> Result<SignList, ParseError> {
    parse_lines(source_lines(source), policy)
}

/// Parse already-split document lines.
pub fn parse_lines(
    lines: Vec<SourceLine>,
    policy: BlockErrorPolicy,
) -> Result<SignList, ParseError> {
    let (blocks, report) = select_sign_blocks(group_into_blocks(lines));
    info!(
        sign_blocks = report.sign_blocks,
        total_blocks = report.total_blocks,
        "detected {} sign blocks out of {} total",
        report.sign_blocks,
        report.total_blocks
    );
    info!(other_block_types = ?report.other_block_types, "skipping non-sign blocks");

    let mut list = SignList {
        report,
        ..Default::default()
    };
    for block in blocks {
        let outcome = SignBlock::from_block(block).and_then(|block| build_sign(&block));
        match outcome {
            Ok(BuildOutcome::Built(sign)) => list.signs.push(sign),
            Ok(BuildOutcome::Discarded) => list.discarded += 1,
            Err(err) if policy == BlockErrorPolicy::Skip && !err.is_fatal_to_parse() => {
                warn!(%err, line = err.kind.line(), "skipping invalid sign block");
                list.skipped.push(err);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(list)
}
