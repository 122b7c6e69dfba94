//! # ogsl-parser
//!
//! A parser for the OGSL sign-list format.
//!
//! A sign list is a line-oriented, tag-prefixed description of cuneiform signs. This crate
//! turns such a document into a forest of typed entities (`Sign` → `Form` → `Value`) and
//! projects that forest into a flat mapping from reading to glyph.
//!
//! File Layout
//!
//!     src/ogsl
//!       ├── token       The tag table and tokenized line types
//!       ├── lexing      Line tokenization and block segmentation
//!       ├── building    The scoped entity builder
//!       ├── ast         Entities and errors
//!       ├── projection  Reading → glyph mapping
//!       ├── pipeline    Batch driver over a whole document
//!       └── loader      Reading documents from disk or strings
//!
//! Data flows strictly forward: raw text → blocks → sign blocks → entity forest → mapping.

pub mod ogsl;

pub use ogsl::ast::{ErrorKind, Field, Form, Metadata, ParseError, Sign, UnicodeInfo, Value};
pub use ogsl::building::{build_sign, BuildOutcome, ScopeKind};
pub use ogsl::loader::{DocumentLoader, LoaderError};
pub use ogsl::pipeline::{parse_document, parse_document_with, BlockErrorPolicy, SignList};
pub use ogsl::projection::{project, ReadingMap};
