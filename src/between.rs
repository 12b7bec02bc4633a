use crate::cursor::Cursor;
use crate::error::{RecombResult, is_failure};
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value with
/// the delimiters discarded. Atomic like every sequence.
///
/// Whitespace is not handled; wrap the delimiters with `text::whitespace::lexeme`
/// where needed.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<C, P1, P2, P3> Parser<C> for Between<P1, P2, P3>
where
    C: Cursor,
    P1: Parser<C>,
    P2: Parser<C>,
    P3: Parser<C>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: &mut C) -> RecombResult<P2::Output> {
        let start = cursor.snapshot();
        let result = self.open.parse(cursor).and_then(|_| {
            let value = self.content.parse(cursor)?;
            self.close.parse(cursor)?;
            Ok(value)
        });
        if is_failure(&result) {
            cursor.rewind(start);
        }
        result
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3> {
    Between {
        open,
        content,
        close,
    }
}
