//! Single-element parsers and the literal coercions
//!
//! A `char` is a parser over character cursors and a `u8` is a parser over byte
//! cursors: each matches exactly itself. Other element types opt in by
//! implementing `Parser` for their own cursor, or through [`is`] and
//! [`parse_if`].

use crate::cursor::Cursor;
use crate::error::{RecombError, RecombResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that consumes one element satisfying a predicate
pub struct ParseIf<F> {
    predicate: F,
}

impl<C, F> Parser<C> for ParseIf<F>
where
    C: Cursor,
    F: Fn(&C::Element) -> bool,
{
    type Output = C::Element;

    fn parse(&self, cursor: &mut C) -> RecombResult<C::Element> {
        match cursor.current() {
            Some(element) if (self.predicate)(&element) => {
                cursor.advance();
                Ok(element)
            }
            _ => Err(RecombError::NoMatch),
        }
    }
}

/// Consume and return the current element if `predicate` holds for it
pub fn parse_if<F>(predicate: F) -> ParseIf<F> {
    ParseIf { predicate }
}

/// Parser that matches one element equal to the expected one
pub struct Is<T> {
    expected: T,
}

impl<C, T> Parser<C> for Is<T>
where
    C: Cursor<Element = T>,
    T: PartialEq,
{
    type Output = T;

    fn parse(&self, cursor: &mut C) -> RecombResult<T> {
        match cursor.current() {
            Some(element) if element == self.expected => {
                cursor.advance();
                Ok(element)
            }
            _ => Err(RecombError::NoMatch),
        }
    }
}

/// Convenience function to create an Is parser
pub fn is<T>(expected: T) -> Is<T> {
    Is { expected }
}

impl<C: Cursor<Element = char>> Parser<C> for char {
    type Output = char;

    fn parse(&self, cursor: &mut C) -> RecombResult<char> {
        is(*self).parse(cursor)
    }
}

impl<C: Cursor<Element = u8>> Parser<C> for u8 {
    type Output = u8;

    fn parse(&self, cursor: &mut C) -> RecombResult<u8> {
        is(*self).parse(cursor)
    }
}

/// Parser that consumes any single element
pub struct Any;

impl<C: Cursor> Parser<C> for Any {
    type Output = C::Element;

    fn parse(&self, cursor: &mut C) -> RecombResult<C::Element> {
        let element = cursor.current().ok_or(RecombError::NoMatch)?;
        cursor.advance();
        Ok(element)
    }
}

pub fn any() -> Any {
    Any
}

/// Parser that succeeds only at end of input, consuming nothing
pub struct End;

impl<C: Cursor> Parser<C> for End {
    type Output = ();

    fn parse(&self, cursor: &mut C) -> RecombResult<()> {
        if cursor.at_end() {
            Ok(())
        } else {
            Err(RecombError::NoMatch)
        }
    }
}

pub fn end() -> End {
    End
}

/// Parser that matches one element inside an inclusive range
pub struct InRange<T> {
    low: T,
    high: T,
}

impl<C, T> Parser<C> for InRange<T>
where
    C: Cursor<Element = T>,
    T: PartialOrd,
{
    type Output = T;

    fn parse(&self, cursor: &mut C) -> RecombResult<T> {
        match cursor.current() {
            Some(element) if self.low <= element && element <= self.high => {
                cursor.advance();
                Ok(element)
            }
            _ => Err(RecombError::NoMatch),
        }
    }
}

/// Match one element `e` with `low <= e <= high`
pub fn in_range<T>(low: T, high: T) -> InRange<T> {
    InRange { low, high }
}

/// Parser that matches one character out of a set
pub struct OneOf {
    set: &'static str,
}

impl<C: Cursor<Element = char>> Parser<C> for OneOf {
    type Output = char;

    fn parse(&self, cursor: &mut C) -> RecombResult<char> {
        let set = self.set;
        parse_if(|ch: &char| set.contains(*ch)).parse(cursor)
    }
}

pub fn one_of(set: &'static str) -> OneOf {
    OneOf { set }
}

/// Parser that matches an exact string character by character
///
/// All-or-nothing: a partial match rewinds to where it started.
pub struct Tag {
    expected: Cow<'static, str>,
}

impl<C: Cursor<Element = char>> Parser<C> for Tag {
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: &mut C) -> RecombResult<Self::Output> {
        let start = cursor.snapshot();
        for expected in self.expected.chars() {
            if cursor.current() != Some(expected) {
                cursor.rewind(start);
                return Err(RecombError::NoMatch);
            }
            cursor.advance();
        }
        Ok(self.expected.clone())
    }
}

/// Convenience function to create a Tag parser
pub fn tag(expected: impl Into<Cow<'static, str>>) -> Tag {
    Tag {
        expected: expected.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{ByteCursor, SliceCursor, StrCursor};

    #[test]
    fn test_parse_if_consumes_on_match() {
        let mut cursor = StrCursor::new("7x");
        let digit = parse_if(|ch: &char| ch.is_ascii_digit());

        assert_eq!(digit.parse(&mut cursor).unwrap(), '7');
        assert_eq!(cursor.current(), Some('x'));
    }

    #[test]
    fn test_parse_if_leaves_cursor_on_mismatch() {
        let mut cursor = StrCursor::new("x7");
        let digit = parse_if(|ch: &char| ch.is_ascii_digit());

        assert!(digit.parse(&mut cursor).unwrap_err().is_no_match());
        assert_eq!(cursor.snapshot().offset(), 0);
    }

    #[test]
    fn test_parse_if_at_end() {
        let mut cursor = StrCursor::new("");
        assert!(parse_if(|_: &char| true).parse(&mut cursor).is_err());
    }

    #[test]
    fn test_char_literal_is_a_parser() {
        let mut cursor = StrCursor::new("ab");
        assert_eq!('a'.parse(&mut cursor).unwrap(), 'a');
        assert!('a'.parse(&mut cursor).is_err());
        assert_eq!('b'.parse(&mut cursor).unwrap(), 'b');
    }

    #[test]
    fn test_byte_literal_is_a_parser() {
        let mut cursor = ByteCursor::new(b"A5");
        assert_eq!(b'A'.parse(&mut cursor).unwrap(), b'A');
        assert_eq!(b'5'.parse(&mut cursor).unwrap(), b'5');
        assert!(cursor.at_end());
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Token {
        Open,
        Close,
    }

    #[test]
    fn test_is_on_custom_tokens() {
        let tokens = [Token::Open, Token::Close];
        let mut cursor = SliceCursor::new(&tokens);

        assert!(is(Token::Close).parse(&mut cursor).is_err());
        assert_eq!(is(Token::Open).parse(&mut cursor).unwrap(), Token::Open);
        assert_eq!(is(Token::Close).parse(&mut cursor).unwrap(), Token::Close);
    }

    #[test]
    fn test_any_and_end() {
        let mut cursor = StrCursor::new("z");
        assert!(end().parse(&mut cursor).is_err());
        assert_eq!(any().parse(&mut cursor).unwrap(), 'z');
        assert!(any().parse(&mut cursor).is_err());
        assert!(end().parse(&mut cursor).is_ok());
    }

    #[test]
    fn test_in_range() {
        let mut cursor = StrCursor::new("c9");
        assert_eq!(in_range('a', 'f').parse(&mut cursor).unwrap(), 'c');
        assert!(in_range('a', 'f').parse(&mut cursor).is_err());
        assert_eq!(in_range('0', '9').parse(&mut cursor).unwrap(), '9');
    }

    #[test]
    fn test_one_of() {
        let mut cursor = StrCursor::new("-+x");
        assert_eq!(one_of("+-").parse(&mut cursor).unwrap(), '-');
        assert_eq!(one_of("+-").parse(&mut cursor).unwrap(), '+');
        assert!(one_of("+-").parse(&mut cursor).is_err());
    }

    #[test]
    fn test_tag_exact_match() {
        let mut cursor = StrCursor::new("hello world");
        assert_eq!(tag("hello").parse(&mut cursor).unwrap(), "hello");
        assert_eq!(cursor.current(), Some(' '));
    }

    #[test]
    fn test_tag_partial_match_rewinds() {
        let mut cursor = StrCursor::new("help");
        assert!(tag("hello").parse(&mut cursor).is_err());
        assert_eq!(cursor.snapshot().offset(), 0);
    }

    #[test]
    fn test_tag_unicode() {
        let mut cursor = StrCursor::new("こんにちは世界");
        assert_eq!(tag("こんにちは").parse(&mut cursor).unwrap(), "こんにちは");
        assert_eq!(cursor.current(), Some('世'));
    }
}
