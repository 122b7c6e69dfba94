//! Sign-list entities
//!
//!     The three entity kinds nest strictly: a [Sign] owns [Form]s and [Value]s, a [Form] owns
//!     [Value]s. Sign and form share the same descriptive fields, collected in [Metadata].

pub mod form;
pub mod metadata;
pub mod sign;
pub mod value;

pub use form::Form;
pub use metadata::{Metadata, UnicodeInfo};
pub use sign::Sign;
pub use value::Value;

/// Names containing this character describe compound signs, e.g. `|A.AN|`.
pub const COMPOUND_DELIMITER: char = '|';
