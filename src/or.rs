use crate::cursor::{Cursor, CursorId, Snapshot};
use crate::error::{RecombError, RecombResult, is_failure};
use crate::parser::Parser;
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use tracing::trace;

type Key = (CursorId, Snapshot);

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Each `Or` node remembers the `(cursor, position)` pairs at which its first
/// branch is currently running. Re-entering the node at the same position while
/// that branch is still running means the grammar recursed into itself without
/// consuming input (direct left recursion); the first branch is then skipped and
/// the second one tried straight away, which keeps the recursion finite.
///
/// Only re-entry into this very node is detected. Left recursion that cycles
/// through several alternation nodes, or through a sequence before reaching an
/// alternation, is not broken here.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
    in_progress: RefCell<FxHashSet<Key>>,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or {
            parser1,
            parser2,
            in_progress: RefCell::new(FxHashSet::default()),
        }
    }
}

/// Marks a key as in progress for as long as it lives
struct InProgress<'a> {
    set: &'a RefCell<FxHashSet<Key>>,
    key: Key,
}

impl<'a> InProgress<'a> {
    fn enter(set: &'a RefCell<FxHashSet<Key>>, key: Key) -> Option<Self> {
        let inserted = set.borrow_mut().insert(key);
        inserted.then(|| InProgress { set, key })
    }
}

impl Drop for InProgress<'_> {
    fn drop(&mut self) {
        self.set.borrow_mut().remove(&self.key);
    }
}

impl<C, P1, P2, O> Parser<C> for Or<P1, P2>
where
    C: Cursor,
    P1: Parser<C, Output = O>,
    P2: Parser<C, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut C) -> RecombResult<O> {
        let start = cursor.snapshot();
        let key = (cursor.identity(), start);

        match InProgress::enter(&self.in_progress, key) {
            Some(_entry) => match self.parser1.parse(cursor) {
                Err(RecombError::NoMatch) => cursor.rewind(start),
                result => return result,
            },
            None => trace!(position = start.offset(), "re-entered alternation, skipping first branch"),
        }

        let result = self.parser2.parse(cursor);
        if is_failure(&result) {
            cursor.rewind(start);
        }
        result
    }
}

/// Extension trait to add .or() method support for parsers
///
/// The cursor type is not fixed here; `Or`'s `Parser` impl checks both branches
/// once the combined parser runs.
pub trait OrExt: Sized {
    fn or<P>(self, other: P) -> Or<Self, P> {
        Or::new(self, other)
    }
}

/// Implement OrExt for all types
impl<P> OrExt for P {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2> {
    Or::new(parser1, parser2)
}

/// Ordered choice over any number of parsers
///
/// `or![a, b, c]` is `or(or(a, b), c)`: alternatives are tried left to right and
/// the first success wins.
#[macro_export]
macro_rules! or {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::or!($crate::or::or($first, $second) $(, $rest)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::and;
    use crate::cursors::{ByteCursor, SliceCursor, StrCursor};
    use crate::element::tag;
    use crate::error::GrammarError;
    use crate::parser::from_fn;

    #[test]
    fn test_or_first_succeeds() {
        let mut cursor = ByteCursor::new(b"abc");
        let parser = or(b'a', b'b');

        assert_eq!(parser.parse(&mut cursor).unwrap(), b'a');
        assert_eq!(cursor.current(), Some(b'b'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let mut cursor = ByteCursor::new(b"bcd");
        let parser = or(b'a', b'b');

        assert_eq!(parser.parse(&mut cursor).unwrap(), b'b');
        assert_eq!(cursor.current(), Some(b'c'));
    }

    #[test]
    fn test_or_both_fail() {
        let mut cursor = ByteCursor::new(b"xyz");
        let parser = or(b'a', b'b');

        assert!(parser.parse(&mut cursor).unwrap_err().is_no_match());
        assert_eq!(cursor.snapshot().offset(), 0);
    }

    #[test]
    fn test_or_prefers_left_branch() {
        let mut cursor = StrCursor::new("abc");
        let parser = or(tag("ab"), tag("abc"));

        assert_eq!(parser.parse(&mut cursor).unwrap(), "ab");
        assert_eq!(cursor.current(), Some('c'));
    }

    #[test]
    fn test_or_rewinds_partial_first_branch() {
        let mut cursor = StrCursor::new("ac");
        let parser = or(and('a', 'b'), and('a', 'c'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), ('a', 'c'));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_or_method_chain() {
        let mut cursor = StrCursor::new("c");
        let parser = 'a'.or('b').or('c');

        assert_eq!(parser.parse(&mut cursor).unwrap(), 'c');
        assert!(cursor.at_end());
    }

    #[test]
    fn test_or_macro() {
        let mut cursor = StrCursor::new("dba");
        let parser = crate::or!['a', 'b', 'c', 'd'];

        assert_eq!(parser.parse(&mut cursor).unwrap(), 'd');
        assert_eq!(parser.parse(&mut cursor).unwrap(), 'b');
        assert_eq!(parser.parse(&mut cursor).unwrap(), 'a');
        assert!(parser.parse(&mut cursor).is_err());
    }

    #[test]
    fn test_or_propagates_hard_errors() {
        let mut cursor = StrCursor::new("a");
        let broken = from_fn(|_: &mut StrCursor<'_>| -> RecombResult<char> {
            Err(GrammarError::Unbound { name: "x".into() }.into())
        });
        let parser = or(broken, 'a');

        assert_eq!(
            parser.parse(&mut cursor).unwrap_err(),
            RecombError::Grammar(GrammarError::Unbound { name: "x".into() })
        );
    }

    #[test]
    fn test_or_guard_is_released_after_parse() {
        let mut cursor = StrCursor::new("b");
        let parser = or('a', 'b');
        parser.parse(&mut cursor).unwrap();
        assert!(parser.in_progress.borrow().is_empty());
    }

    #[test]
    fn test_or_method_works_on_any_cursor() {
        let parser = 'a'.or('b');
        let letters = ['b', 'a'];

        let mut text = StrCursor::new("b");
        assert_eq!(parser.parse(&mut text), Ok('b'));

        let mut slice = SliceCursor::new(&letters);
        assert_eq!(parser.parse(&mut slice), Ok('b'));
        assert_eq!(slice.current(), Some('a'));
    }
}
