//! Building
//!
//!     The scoped entity builder: a single pass over one [SignBlock](crate::ogsl::lexing::SignBlock)
//!     that produces one [Sign](crate::ogsl::ast::Sign).
//!
//!     Tags are interpreted against whichever scope is open. The sign is always open; a `@form`
//!     line opens a form on top of it, and a `@v`/`@v-` line opens a value on top of whichever
//!     of the two is active. Each scope kind has its own dispatch table in [scope], so an illegal
//!     tag/scope pair is a plain match arm rather than a runtime check.
//!
//!     Scopes accumulate into mutable builders and are frozen into entities when they close.

pub mod builder;
pub mod scope;

pub use builder::{build_sign, BuildOutcome};
pub use scope::ScopeKind;
