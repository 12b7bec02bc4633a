use crate::between::between;
use crate::cursor::Cursor;
use crate::element::{any, parse_if, tag};
use crate::error::{RecombError, RecombResult};
use crate::many::zero_plus_with;
use crate::parser::Parser;
use crate::reducer::Concat;
use crate::sequence::{Sequence, seq};

/// Parser that matches a double-quoted string literal and returns its contents
///
/// Supported escapes: `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t` and `\uXXXX`,
/// where a UTF-16 surrogate pair spells out a single character. Raw control
/// characters are not allowed inside the quotes.
pub struct Quoted;

impl<C: Cursor<Element = char>> Parser<C> for Quoted {
    type Output = String;

    fn parse(&self, cursor: &mut C) -> RecombResult<String> {
        between('"', zero_plus_with(StringChar, Concat), '"').parse(cursor)
    }
}

pub fn quoted() -> Quoted {
    Quoted
}

/// One logical character of a string body
struct StringChar;

impl<C: Cursor<Element = char>> Parser<C> for StringChar {
    type Output = char;

    fn parse(&self, cursor: &mut C) -> RecombResult<char> {
        match cursor.current() {
            Some('\\') => Escape.parse(cursor),
            Some(ch) if ch != '"' && ch >= ' ' => {
                cursor.advance();
                Ok(ch)
            }
            _ => Err(RecombError::NoMatch),
        }
    }
}

struct Escape;

impl<C: Cursor<Element = char>> Parser<C> for Escape {
    type Output = char;

    fn parse(&self, cursor: &mut C) -> RecombResult<char> {
        seq(|s: &mut Sequence<'_, C>| {
            s.skip('\\')?;
            let unescaped = match s.bind(any())? {
                '"' => '"',
                '\\' => '\\',
                '/' => '/',
                'b' => '\u{8}',
                'f' => '\u{c}',
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                'u' => s.bind(CodePoint)?,
                _ => return Err(RecombError::NoMatch),
            };
            Ok(unescaped)
        })
        .parse(cursor)
    }
}

/// The `XXXX` of a `\uXXXX` escape, or a surrogate pair `XXXX\uXXXX`
struct CodePoint;

impl<C: Cursor<Element = char>> Parser<C> for CodePoint {
    type Output = char;

    fn parse(&self, cursor: &mut C) -> RecombResult<char> {
        seq(|s: &mut Sequence<'_, C>| {
            let high = s.bind(Hex4)?;
            let code = if (0xD800..0xDC00).contains(&high) {
                s.skip(tag("\\u"))?;
                let low = s.bind(Hex4)?;
                if !(0xDC00..0xE000).contains(&low) {
                    return Err(RecombError::NoMatch);
                }
                0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
            } else {
                high
            };
            char::from_u32(code).ok_or(RecombError::NoMatch)
        })
        .parse(cursor)
    }
}

/// Exactly four hex digits
struct Hex4;

impl<C: Cursor<Element = char>> Parser<C> for Hex4 {
    type Output = u32;

    fn parse(&self, cursor: &mut C) -> RecombResult<u32> {
        seq(|s: &mut Sequence<'_, C>| {
            let mut value = 0;
            for _ in 0..4 {
                let digit = s.bind(parse_if(|ch: &char| ch.is_ascii_hexdigit()))?;
                value = value * 16 + digit.to_digit(16).unwrap_or(0);
            }
            Ok(value)
        })
        .parse(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StrCursor;

    #[test]
    fn test_plain_string() {
        let mut cursor = StrCursor::new(r#""hello" rest"#);

        assert_eq!(quoted().parse(&mut cursor).unwrap(), "hello");
        assert_eq!(cursor.current(), Some(' '));
    }

    #[test]
    fn test_empty_string() {
        let mut cursor = StrCursor::new(r#""""#);

        assert_eq!(quoted().parse(&mut cursor).unwrap(), "");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_unicode_content() {
        let mut cursor = StrCursor::new("\"こんにちは世界\"");

        assert_eq!(quoted().parse(&mut cursor).unwrap(), "こんにちは世界");
    }

    #[test]
    fn test_simple_escapes() {
        let mut cursor = StrCursor::new(r#""ab\ncd\t\"q\"\\\/""#);

        assert_eq!(quoted().parse(&mut cursor).unwrap(), "ab\ncd\t\"q\"\\/");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_unicode_escapes() {
        let mut cursor = StrCursor::new(r#""\u00e9\u4E16""#);
        assert_eq!(quoted().parse(&mut cursor).unwrap(), "é世");

        let mut cursor = StrCursor::new(r#""\ud83d\ude00""#);
        assert_eq!(quoted().parse(&mut cursor).unwrap(), "😀");
    }

    #[test]
    fn test_invalid_escapes_fail() {
        for input in [r#""\x""#, r#""\u12""#, r#""\ud83d""#, r#""\ude00""#] {
            let mut cursor = StrCursor::new(input);

            assert!(quoted().parse(&mut cursor).is_err(), "accepted {input}");
            assert_eq!(cursor.snapshot().offset(), 0);
        }
    }

    #[test]
    fn test_unterminated_string_rewinds() {
        let mut cursor = StrCursor::new(r#""abc"#);

        assert!(quoted().parse(&mut cursor).is_err());
        assert_eq!(cursor.snapshot().offset(), 0);
    }

    #[test]
    fn test_raw_newline_is_rejected() {
        let mut cursor = StrCursor::new("\"a\nb\"");

        assert!(quoted().parse(&mut cursor).is_err());
    }
}
