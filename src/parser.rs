use crate::cursor::TextCursor;
use crate::result::ParseResult;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// The trait is object safe so grammars can hold `Box<dyn Parser<Output = T>>`,
/// which is what [`crate::defer::Defer`] does. Outputs never borrow the
/// input, so a grammar can outlive every text it parses.
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success. A
    /// failure never consumes input: the caller keeps its own cursor.
    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output>;
}

impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P> Parser for Arc<P>
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}
