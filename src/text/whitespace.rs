use crate::cursor::Cursor;
use crate::eat::{Eat, eat};
use crate::element::parse_if;
use crate::error::RecombResult;
use crate::parser::Parser;

/// Parser that matches a single Unicode whitespace character
pub struct Whitespace;

impl<C: Cursor<Element = char>> Parser<C> for Whitespace {
    type Output = char;

    fn parse(&self, cursor: &mut C) -> RecombResult<char> {
        parse_if(|ch: &char| ch.is_whitespace()).parse(cursor)
    }
}

pub fn whitespace() -> Whitespace {
    Whitespace
}

/// Skip any amount of whitespace, including none
pub fn skip_whitespace() -> Eat<Whitespace> {
    eat(whitespace())
}

/// Parser combinator that skips the whitespace following a match
///
/// Wrapping every token of a grammar in a lexeme leaves only the leading
/// whitespace of the whole input to deal with.
pub struct Lexeme<P> {
    parser: P,
}

impl<C, P> Parser<C> for Lexeme<P>
where
    C: Cursor<Element = char>,
    P: Parser<C>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut C) -> RecombResult<P::Output> {
        let value = self.parser.parse(cursor)?;
        skip_whitespace().parse(cursor)?;
        Ok(value)
    }
}

pub fn lexeme<P>(parser: P) -> Lexeme<P> {
    Lexeme { parser }
}
