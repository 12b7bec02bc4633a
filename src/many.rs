use crate::cursor::Cursor;
use crate::error::{RecombError, RecombResult};
use crate::parser::Parser;
use crate::reducer::{Collect, Reducer};

/// Apply `parser` until it fails, folding every success into `acc`
///
/// Returns the number of successes. A success that consumed nothing ends the
/// loop, since repeating it would never terminate.
pub(crate) fn repeat<C, P, R>(
    parser: &P,
    reducer: &R,
    acc: &mut R::Acc,
    cursor: &mut C,
) -> RecombResult<usize>
where
    C: Cursor,
    P: Parser<C>,
    R: Reducer<P::Output>,
{
    let mut count = 0;
    loop {
        let before = cursor.snapshot();
        match parser.parse(cursor) {
            Ok(value) => {
                reducer.combine(acc, value);
                count += 1;
                if cursor.snapshot() == before {
                    return Ok(count);
                }
            }
            Err(RecombError::NoMatch) => return Ok(count),
            Err(error) => return Err(error),
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
pub struct ZeroPlus<P, R> {
    parser: P,
    reducer: R,
}

impl<P, R> ZeroPlus<P, R> {
    pub fn new(parser: P, reducer: R) -> Self {
        ZeroPlus { parser, reducer }
    }
}

impl<C, P, R> Parser<C> for ZeroPlus<P, R>
where
    C: Cursor,
    P: Parser<C>,
    R: Reducer<P::Output>,
{
    type Output = R::Output;

    fn parse(&self, cursor: &mut C) -> RecombResult<R::Output> {
        let mut acc = self.reducer.seed();
        // Zero matches is a success, so the count is irrelevant here
        repeat(&self.parser, &self.reducer, &mut acc, cursor)?;
        Ok(self.reducer.finish(acc))
    }
}

/// Zero or more matches collected into a `Vec`
pub fn zero_plus<P>(parser: P) -> ZeroPlus<P, Collect> {
    ZeroPlus::new(parser, Collect)
}

/// Zero or more matches folded with a custom reducer
pub fn zero_plus_with<P, R>(parser: P, reducer: R) -> ZeroPlus<P, R> {
    ZeroPlus::new(parser, reducer)
}
