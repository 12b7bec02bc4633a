use crate::cursor::Cursor;
use crate::error::{RecombError, RecombResult};
use crate::parser::Parser;

/// Parser combinator that greedily consumes and discards matches
///
/// Every successful match stays consumed; only the final, failed attempt is
/// undone. Never fails.
pub struct Eat<P> {
    parser: P,
}

impl<P> Eat<P> {
    pub fn new(parser: P) -> Self {
        Eat { parser }
    }
}

impl<C, P> Parser<C> for Eat<P>
where
    C: Cursor,
    P: Parser<C>,
{
    type Output = ();

    fn parse(&self, cursor: &mut C) -> RecombResult<()> {
        loop {
            let before = cursor.snapshot();
            match self.parser.parse(cursor) {
                Ok(_) if cursor.snapshot() == before => return Ok(()),
                Ok(_) => {}
                Err(RecombError::NoMatch) => {
                    cursor.rewind(before);
                    return Ok(());
                }
                Err(error) => return Err(error),
            }
        }
    }
}

/// Convenience function to create an Eat parser
pub fn eat<P>(parser: P) -> Eat<P> {
    Eat::new(parser)
}
