use crate::cursor::Cursor;
use crate::error::{RecombError, RecombResult};
use crate::many::repeat;
use crate::parser::Parser;
use crate::reducer::{Collect, Reducer};

/// Parser combinator that matches one or more occurrences of the given parser
pub struct OnePlus<P, R> {
    parser: P,
    reducer: R,
}

impl<P, R> OnePlus<P, R> {
    pub fn new(parser: P, reducer: R) -> Self {
        OnePlus { parser, reducer }
    }
}

impl<C, P, R> Parser<C> for OnePlus<P, R>
where
    C: Cursor,
    P: Parser<C>,
    R: Reducer<P::Output>,
{
    type Output = R::Output;

    fn parse(&self, cursor: &mut C) -> RecombResult<R::Output> {
        let start = cursor.snapshot();
        let mut acc = self.reducer.seed();
        if repeat(&self.parser, &self.reducer, &mut acc, cursor)? == 0 {
            cursor.rewind(start);
            return Err(RecombError::NoMatch);
        }
        Ok(self.reducer.finish(acc))
    }
}

/// One or more matches collected into a `Vec`
pub fn one_plus<P>(parser: P) -> OnePlus<P, Collect> {
    OnePlus::new(parser, Collect)
}

/// One or more matches folded with a custom reducer
pub fn one_plus_with<P, R>(parser: P, reducer: R) -> OnePlus<P, R> {
    OnePlus::new(parser, reducer)
}
