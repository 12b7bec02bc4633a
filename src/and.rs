use crate::cursor::Cursor;
use crate::error::{RecombResult, is_failure};
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Atomic: if the second parser fails after the first one consumed input, the
/// cursor is put back where the first parser started.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. For longer
/// sequences with named bindings use [`crate::sequence::seq`].
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<C, P1, P2> Parser<C> for And<P1, P2>
where
    C: Cursor,
    P1: Parser<C>,
    P2: Parser<C>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: &mut C) -> RecombResult<Self::Output> {
        let start = cursor.snapshot();
        let first = self.parser1.parse(cursor)?;
        let second = self.parser2.parse(cursor);
        if is_failure(&second) {
            cursor.rewind(start);
        }
        Ok((first, second?))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2> {
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Sized {
    fn and<P>(self, other: P) -> And<Self, P> {
        And::new(self, other)
    }
}

/// Implement AndExt for all types
impl<P> AndExt for P {}
