use crate::cursor::Cursor;
use crate::error::RecombResult;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<C, P, F, U> Parser<C> for Map<P, F>
where
    C: Cursor,
    P: Parser<C>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut C) -> RecombResult<U> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F>(parser: P, mapper: F) -> Map<P, F> {
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Sized {
    fn map<F>(self, mapper: F) -> Map<Self, F> {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all types
impl<P> MapExt for P {}
