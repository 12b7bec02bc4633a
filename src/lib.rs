//! # Recomb - Backtracking Parser Combinators
//!
//! Parsers are small values that run against a mutable [`Cursor`]: on a match they
//! advance it and return a value, on a mismatch they return
//! [`RecombError::NoMatch`] and leave the cursor where they found it. Combinators
//! build bigger parsers from smaller ones, and a [`RuleSet`] ties named,
//! mutually recursive rules together into a [`Grammar`].
//!
//! - **Backtracking everywhere**: every combinator restores the cursor on failure
//! - **Two kinds of failure**: a mismatch is an ordinary value, while grammar bugs
//!   (unbound or unknown rules) are hard errors no combinator swallows
//! - **Terminating self-reference**: an alternation re-entered at the same
//!   position skips its first branch, so `r = r | base` does not recurse forever
//! - **Any element type**: characters, bytes, or your own tokens
//!
//! ```
//! use recomb::cursors::StrCursor;
//! use recomb::json::Json;
//! use recomb::RuleSet;
//! use recomb::or::or;
//!
//! let rules: RuleSet<'_, StrCursor<'_>, char> =
//!     RuleSet::new().rule("r", |g| or(g.rule("r"), 'a'));
//! let grammar = rules.compile().unwrap();
//!
//! let mut cursor = StrCursor::new("a");
//! assert_eq!(grammar.parse("r", &mut cursor), Ok('a'));
//!
//! assert_eq!(recomb::json::parse("[1, 2]").unwrap(), Json::Array(vec![Json::Int(1), Json::Int(2)]));
//! ```

pub mod and;
pub mod between;
pub mod cursor;
pub mod cursors;
pub mod eat;
pub mod element;
pub mod error;
pub mod grammar;
pub mod json;
pub mod many;
pub mod map;
pub mod maybe;
pub mod or;
pub mod parser;
pub mod reducer;
pub mod separated_list;
pub mod sequence;
pub mod some;
pub mod text;

pub use cursor::{Cursor, CursorId, Snapshot};
pub use cursors::{ByteCursor, SliceCursor, StrCursor};
pub use error::{Diagnostic, GrammarError, RecombError, RecombResult, is_failure};
pub use grammar::{Forward, Grammar, RuleSet, Scope};
pub use parser::{BoxedParser, Parser, boxed, from_fn};
