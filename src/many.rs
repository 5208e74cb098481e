use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Stops at the first mismatch, which is not propagated. A success that
/// consumes nothing is kept once and then ends the repetition, so a
/// child such as `string("")` or `eof()` cannot loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    let consumed = next_cursor.position() > cursor.position();
                    cursor = next_cursor;
                    if !consumed {
                        break;
                    }
                }
                // Many matches zero or more, so a mismatch is not propagated
                Err(ParseError::Mismatch(_)) => break,
                Err(fault @ ParseError::Fault(_)) => return Err(fault),
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}
