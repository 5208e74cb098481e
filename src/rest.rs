use crate::cursor::TextCursor;
use crate::parser::Parser;
use crate::result::{ParseResult, success};

/// Parser that consumes whatever input is left. Never fails.
pub struct RestParser;

impl RestParser {
    pub fn new() -> Self {
        RestParser
    }
}

impl Default for RestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for RestParser {
    type Output = String;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        success(cursor.remaining().to_owned(), cursor.to_end())
    }
}

/// Convenience function to create a RestParser
pub fn rest() -> RestParser {
    RestParser::new()
}
