//! Entities produced by the parser, and the errors raised while producing them
//!
//!     A parsed sign list is a forest: each [Sign] owns its [Form]s and its own [Value]s, and
//!     each form owns its values. Nothing is shared between parents, and nothing is mutated once
//!     the builder that produced it has finished.

pub mod elements;
pub mod error;

pub use elements::{Form, Metadata, Sign, UnicodeInfo, Value, COMPOUND_DELIMITER};
pub use error::{ErrorKind, Field, ParseError};
