//! Ready-made parsers for character input
//!
//! Everything here works on any cursor yielding `char`s, [`StrCursor`] being the
//! usual one.
//!
//! [`StrCursor`]: crate::cursors::StrCursor

pub mod number;
pub mod string;
pub mod whitespace;

pub use number::{Number, digits, integer, number};
pub use string::quoted;
pub use whitespace::{lexeme, skip_whitespace, whitespace};
