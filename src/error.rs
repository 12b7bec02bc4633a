use crate::cursor::{Cursor, Snapshot};
use std::fmt;

/// Errors raised while compiling or running a grammar
///
/// These are bugs in the grammar definition, not properties of the input, and no
/// combinator ever recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("rule `{name}` was invoked before it was bound")]
    Unbound { name: String },
    #[error("rule `{name}` was bound more than once")]
    AlreadyBound { name: String },
    #[error("no rule named `{name}`")]
    UnknownRule { name: String },
    #[error("rule `{name}` outlived the grammar it belongs to")]
    Detached { name: String },
}

/// Outcome of a failed parse
///
/// `NoMatch` is the ordinary failure sentinel: frequent, expected and always
/// recoverable by an enclosing combinator. `Grammar` wraps a hard error that
/// every combinator propagates untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecombError {
    #[error("no match")]
    NoMatch,
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

impl RecombError {
    pub fn is_no_match(&self) -> bool {
        matches!(self, RecombError::NoMatch)
    }
}

pub type RecombResult<T> = Result<T, RecombError>;

/// Returns true if `result` carries the failure sentinel
///
/// Hard grammar errors are not failures in this sense.
pub fn is_failure<T>(result: &RecombResult<T>) -> bool {
    matches!(result, Err(RecombError::NoMatch))
}

/// Minimal description of where a parse stopped: the element found there (or
/// end of input) and the cursor position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<E> {
    pub found: Option<E>,
    pub at: Snapshot,
}

impl<E> Diagnostic<E> {
    /// Describe the cursor's current position
    pub fn here<C>(cursor: &C) -> Self
    where
        C: Cursor<Element = E>,
    {
        Diagnostic {
            found: cursor.current(),
            at: cursor.snapshot(),
        }
    }

    /// Describe the furthest position the cursor ever reached
    ///
    /// After a failed top-level parse the cursor is back at its entry position;
    /// the furthest position is usually where the input stopped making sense. The
    /// cursor is left where it was.
    pub fn furthest<C>(cursor: &mut C) -> Self
    where
        C: Cursor<Element = E>,
    {
        let back = cursor.snapshot();
        cursor.rewind(cursor.furthest());
        let diagnostic = Diagnostic::here(cursor);
        cursor.rewind(back);
        diagnostic
    }
}

impl<E: fmt::Debug> fmt::Display for Diagnostic<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(element) => write!(f, "unexpected {:?} at offset {}", element, self.at.offset()),
            None => write!(f, "unexpected end of input at offset {}", self.at.offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StrCursor;

    #[test]
    fn test_failure_predicate() {
        let failed: RecombResult<()> = Err(RecombError::NoMatch);
        let succeeded: RecombResult<Option<()>> = Ok(None);
        let broken: RecombResult<()> = Err(GrammarError::Unbound { name: "a".into() }.into());

        assert!(is_failure(&failed));
        assert!(!is_failure(&succeeded));
        assert!(!is_failure(&broken));
    }

    #[test]
    fn test_grammar_error_display() {
        let error = RecombError::from(GrammarError::AlreadyBound { name: "value".into() });
        assert_eq!(error.to_string(), "rule `value` was bound more than once");
        assert!(!error.is_no_match());
    }

    #[test]
    fn test_diagnostic_here() {
        let mut cursor = StrCursor::new("ab");
        cursor.advance();
        let diagnostic = Diagnostic::here(&cursor);
        assert_eq!(diagnostic.found, Some('b'));
        assert_eq!(diagnostic.at.offset(), 1);
        assert_eq!(diagnostic.to_string(), "unexpected 'b' at offset 1");
    }

    #[test]
    fn test_diagnostic_furthest_leaves_cursor_alone() {
        let mut cursor = StrCursor::new("abc");
        let start = cursor.snapshot();
        cursor.advance();
        cursor.advance();
        cursor.advance();
        cursor.rewind(start);

        let diagnostic = Diagnostic::furthest(&mut cursor);
        assert_eq!(diagnostic.found, None);
        assert_eq!(diagnostic.at.offset(), 3);
        assert_eq!(diagnostic.to_string(), "unexpected end of input at offset 3");
        assert_eq!(cursor.snapshot(), start);
    }
}
