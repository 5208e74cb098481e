use crate::cursor::TextCursor;
use crate::parser::Parser;
use crate::result::{ParseResult, failure, success};

pub const END_OF_INPUT: &str = "end of input";

/// Parser that only succeeds at the end of the input, without consuming anything
pub struct EofParser;

impl EofParser {
    pub fn new() -> Self {
        EofParser
    }
}

impl Default for EofParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for EofParser {
    type Output = ();

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.is_eof() {
            success((), cursor)
        } else {
            failure(END_OF_INPUT, cursor)
        }
    }
}

/// Convenience function to create an EofParser
pub fn eof() -> EofParser {
    EofParser::new()
}
