use crate::cursor::Cursor;
use crate::error::RecombResult;
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// A parser reads from a mutable cursor and returns either a value or
/// `RecombError::NoMatch`. On success the cursor sits right after the consumed
/// input; on failure the parser leaves the cursor where it found it.
pub trait Parser<C> {
    type Output;

    /// Attempt to parse at the cursor's current position
    fn parse(&self, cursor: &mut C) -> RecombResult<Self::Output>;
}

/// Type-erased, shareable parser
pub type BoxedParser<'g, C, O> = Rc<dyn Parser<C, Output = O> + 'g>;

impl<C: Cursor, P: Parser<C> + ?Sized> Parser<C> for &P {
    type Output = P::Output;

    fn parse(&self, cursor: &mut C) -> RecombResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<C: Cursor, P: Parser<C> + ?Sized> Parser<C> for Rc<P> {
    type Output = P::Output;

    fn parse(&self, cursor: &mut C) -> RecombResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<C: Cursor, P: Parser<C> + ?Sized> Parser<C> for Box<P> {
    type Output = P::Output;

    fn parse(&self, cursor: &mut C) -> RecombResult<Self::Output> {
        (**self).parse(cursor)
    }
}

/// Erase a parser's concrete type
pub fn boxed<'g, C, P>(parser: P) -> BoxedParser<'g, C, P::Output>
where
    C: Cursor,
    P: Parser<C> + 'g,
{
    Rc::new(parser)
}

/// Parser backed by a plain function or closure
///
/// The function must honor the parser contract itself: rewind the cursor before
/// returning `NoMatch`.
pub struct FromFn<F> {
    f: F,
}

impl<C, F, O> Parser<C> for FromFn<F>
where
    C: Cursor,
    F: Fn(&mut C) -> RecombResult<O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut C) -> RecombResult<O> {
        (self.f)(cursor)
    }
}

/// Lift a callable into a parser
///
/// Closures need their argument type spelled out, e.g.
/// `from_fn(|cursor: &mut StrCursor<'_>| ...)`.
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn { f }
}
