use crate::cursor::TextCursor;
use crate::error::{EngineFault, Failure, ParseError};
use std::borrow::Cow;

/// Outcome of invoking a parser
///
/// On success this carries the value and the cursor after the matched input.
/// On failure the caller's own cursor is untouched, so backtracking is just
/// trying something else from the cursor it already holds.
pub type ParseResult<'code, T> = Result<(T, TextCursor<'code>), ParseError<'code>>;

/// Build a successful result
pub fn success<'code, T>(value: T, cursor: TextCursor<'code>) -> ParseResult<'code, T> {
    Ok((value, cursor))
}

/// Build a grammar mismatch at `cursor`
pub fn failure<'code, T>(
    expected: impl Into<Cow<'static, str>>,
    cursor: TextCursor<'code>,
) -> ParseResult<'code, T> {
    Err(ParseError::Mismatch(Failure::new(expected, cursor.loc())))
}

/// Accessors for inspecting a [`ParseResult`]
pub trait ParseResultExt<'code, T> {
    fn is_success(&self) -> bool;

    /// True for an ordinary grammar mismatch
    fn is_mismatch(&self) -> bool;

    /// True for an engine misuse fault
    fn is_fault(&self) -> bool;

    fn value(&self) -> Option<&T>;

    fn into_value(self) -> Option<T>;

    /// What the failing parser expected, for mismatches only
    fn expected(&self) -> Option<&str>;

    /// Cursor position after a success, or where a mismatch occurred
    fn position(&self) -> Option<usize>;

    fn cursor(&self) -> Option<TextCursor<'code>>;

    fn fault(&self) -> Option<&EngineFault>;
}

impl<'code, T> ParseResultExt<'code, T> for ParseResult<'code, T> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn is_mismatch(&self) -> bool {
        matches!(self, Err(ParseError::Mismatch(_)))
    }

    fn is_fault(&self) -> bool {
        matches!(self, Err(ParseError::Fault(_)))
    }

    fn value(&self) -> Option<&T> {
        self.as_ref().ok().map(|(value, _)| value)
    }

    fn into_value(self) -> Option<T> {
        self.ok().map(|(value, _)| value)
    }

    fn expected(&self) -> Option<&str> {
        match self {
            Err(ParseError::Mismatch(failure)) => Some(failure.expected()),
            _ => None,
        }
    }

    fn position(&self) -> Option<usize> {
        match self {
            Ok((_, cursor)) => Some(cursor.position()),
            Err(ParseError::Mismatch(failure)) => Some(failure.position()),
            Err(ParseError::Fault(_)) => None,
        }
    }

    fn cursor(&self) -> Option<TextCursor<'code>> {
        self.as_ref().ok().map(|(_, cursor)| *cursor)
    }

    fn fault(&self) -> Option<&EngineFault> {
        match self {
            Err(ParseError::Fault(fault)) => Some(fault),
            _ => None,
        }
    }
}
