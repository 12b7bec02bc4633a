use crate::cursor::Cursor;
use crate::error::{RecombResult, is_failure};
use crate::parser::Parser;

/// Clause driver handed to the body of a [`seq`]
///
/// Each call runs one clause at the current position. Failures are meant to be
/// propagated with `?`; the enclosing `Seq` takes care of rewinding.
pub struct Sequence<'s, C> {
    cursor: &'s mut C,
}

impl<C: Cursor> Sequence<'_, C> {
    /// Run a clause and hand back its value for binding
    pub fn bind<P: Parser<C>>(&mut self, parser: P) -> RecombResult<P::Output> {
        parser.parse(self.cursor)
    }

    /// Run an anonymous clause, discarding its value
    pub fn skip<P: Parser<C>>(&mut self, parser: P) -> RecombResult<()> {
        parser.parse(self.cursor).map(drop)
    }
}

/// Parser combinator running a sequence of clauses with named bindings
///
/// The body runs the clauses in order through a [`Sequence`], binding whichever
/// values it needs with ordinary `let`s, and returns the sequence's result. If
/// any clause fails the whole sequence fails and the cursor goes back to where
/// the sequence started.
pub struct Seq<F> {
    body: F,
}

impl<C, F, O> Parser<C> for Seq<F>
where
    C: Cursor,
    F: Fn(&mut Sequence<'_, C>) -> RecombResult<O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut C) -> RecombResult<O> {
        let start = cursor.snapshot();
        let result = (self.body)(&mut Sequence { cursor: &mut *cursor });
        if is_failure(&result) {
            cursor.rewind(start);
        }
        result
    }
}

/// Convenience function to create a Seq parser
///
/// ```
/// use recomb::cursors::StrCursor;
/// use recomb::parser::Parser;
/// use recomb::sequence::{seq, Sequence};
///
/// let pair = seq(|s: &mut Sequence<'_, StrCursor<'_>>| {
///     let key = s.bind('k')?;
///     s.skip('=')?;
///     let value = s.bind('v')?;
///     Ok((key, value))
/// });
///
/// let mut cursor = StrCursor::new("k=v");
/// assert_eq!(pair.parse(&mut cursor).unwrap(), ('k', 'v'));
/// ```
pub fn seq<C, F, O>(body: F) -> Seq<F>
where
    C: Cursor,
    F: Fn(&mut Sequence<'_, C>) -> RecombResult<O>,
{
    Seq { body }
}
