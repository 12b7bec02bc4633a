use crate::cursor::Cursor;
use crate::error::{RecombError, RecombResult};
use crate::parser::Parser;

/// Parser combinator that makes another parser optional
///
/// Yields `Some` with the inner value on a match and `None` otherwise. The inner
/// parser has already restored the cursor when it fails, so nothing is rewound
/// here. Never fails.
pub struct Maybe<P> {
    parser: P,
}

impl<C, P> Parser<C> for Maybe<P>
where
    C: Cursor,
    P: Parser<C>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: &mut C) -> RecombResult<Self::Output> {
        match self.parser.parse(cursor) {
            Ok(value) => Ok(Some(value)),
            Err(RecombError::NoMatch) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

pub fn maybe<P>(parser: P) -> Maybe<P> {
    Maybe { parser }
}

/// Like [`Maybe`], but falls back to a fixed value instead of `None`
pub struct MaybeOr<P, T> {
    parser: P,
    default: T,
}

impl<C, P, T> Parser<C> for MaybeOr<P, T>
where
    C: Cursor,
    P: Parser<C, Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: &mut C) -> RecombResult<T> {
        match self.parser.parse(cursor) {
            Err(RecombError::NoMatch) => Ok(self.default.clone()),
            result => result,
        }
    }
}

pub fn maybe_or<P, T>(parser: P, default: T) -> MaybeOr<P, T> {
    MaybeOr { parser, default }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StrCursor;
    use crate::element::one_of;
    use crate::error::GrammarError;
    use crate::parser::from_fn;

    #[test]
    fn test_maybe_present() {
        let mut cursor = StrCursor::new("-5");
        assert_eq!(maybe('-').parse(&mut cursor).unwrap(), Some('-'));
        assert_eq!(cursor.current(), Some('5'));
    }

    #[test]
    fn test_maybe_absent() {
        let mut cursor = StrCursor::new("5");
        assert_eq!(maybe('-').parse(&mut cursor).unwrap(), None);
        assert_eq!(cursor.current(), Some('5'));
    }

    #[test]
    fn test_maybe_or_default() {
        let mut cursor = StrCursor::new("5");
        let sign = maybe_or(one_of("+-"), '+');
        assert_eq!(sign.parse(&mut cursor).unwrap(), '+');
        assert_eq!(cursor.snapshot().offset(), 0);
    }

    #[test]
    fn test_maybe_does_not_swallow_hard_errors() {
        let mut cursor = StrCursor::new("");
        let broken = from_fn(|_: &mut StrCursor<'_>| -> RecombResult<char> {
            Err(GrammarError::Detached { name: "x".into() }.into())
        });

        assert!(matches!(
            maybe(broken).parse(&mut cursor),
            Err(RecombError::Grammar(GrammarError::Detached { .. }))
        ));
    }
}
