use crate::cursor::Cursor;
use crate::error::{RecombError, RecombResult};
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one element
/// - A separator not followed by an item fails the whole list
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<C, P, PS> Parser<C> for SeparatedList<P, PS>
where
    C: Cursor,
    P: Parser<C>,
    PS: Parser<C>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut C) -> RecombResult<Self::Output> {
        let start = cursor.snapshot();
        let mut results = vec![self.parser.parse(cursor)?];

        loop {
            match self.separator.parse(cursor) {
                Ok(_) => {}
                Err(RecombError::NoMatch) => return Ok(results),
                Err(error) => return Err(error),
            }

            match self.parser.parse(cursor) {
                Ok(value) => results.push(value),
                Err(error) => {
                    cursor.rewind(start);
                    return Err(error);
                }
            }
        }
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS> {
    SeparatedList { parser, separator }
}
