//! Testing utilities
//!
//!     Helpers shared by unit and integration tests. Prefer the curated sample sign list under
//!     `docs/fixtures/` (see [fixture]) for anything that exercises a whole document; use
//!     [sign_block] for focused tests of a single block.

use crate::ogsl::lexing::{group_into_blocks, source_lines, SignBlock};
use std::path::PathBuf;

/// The curated sample used across the test suites.
pub const SAMPLE_SIGN_LIST: &str = "docs/fixtures/ogsl-sample.asl";

/// Resolve a path relative to the workspace root.
pub fn workspace_path(relative_path: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let workspace_root = std::path::Path::new(manifest_dir)
        .parent()
        .expect("crate lives inside the workspace");
    workspace_root.join(relative_path)
}

/// Read a fixture file relative to the workspace root.
pub fn fixture(relative_path: &str) -> String {
    let path = workspace_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", path.display(), err))
}

/// Segment `source` and return its first block as a validated sign block.
///
/// # Panics
///
/// If the source has no block or the first block's envelope is invalid.
pub fn sign_block(source: &str) -> SignBlock {
    let block = group_into_blocks(source_lines(source))
        .into_iter()
        .next()
        .expect("source contains a block");
    SignBlock::from_block(block).expect("block has a valid sign envelope")
}
