use crate::cursor::TextCursor;
use crate::parser::Parser;
use crate::result::{ParseResult, failure, success};
use std::borrow::Cow;

/// Parser that matches an exact string
pub struct StringParser {
    expected: Cow<'static, str>,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser for StringParser {
    type Output = Cow<'static, str>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.starts_with(&self.expected) {
            // Clone is cheap here - just copies the reference for &'static str
            success(self.expected.clone(), cursor.advance(self.expected.len()))
        } else {
            failure(self.expected.clone(), cursor)
        }
    }
}

/// Convenience function to create a StringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}
