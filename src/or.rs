use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser starts from the same cursor as the first. When both
/// fail the failure that got furthest into the input is reported. Engine
/// faults are never retried.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let first = match self.parser1.parse(cursor) {
            Err(ParseError::Mismatch(failure)) => failure,
            other => return other,
        };

        match self.parser2.parse(cursor) {
            Err(ParseError::Mismatch(second)) => Err(first.furthest(second).into()),
            other => other,
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    Or::new(parser1, parser2)
}
