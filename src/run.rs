use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use tracing::{debug, error, trace};

/// Run `parser` once over `text`, starting at position 0
///
/// The result is returned as is: nothing requires the whole input to be
/// consumed. Compose with [`crate::eof`] for that.
pub fn run<'code, P>(parser: &P, text: &'code str) -> ParseResult<'code, P::Output>
where
    P: Parser + ?Sized,
{
    trace!(input_len = text.len(), "running parser");

    let result = parser.parse(TextCursor::new(text));

    match &result {
        Ok((_, cursor)) => trace!(consumed = cursor.position(), "parser succeeded"),
        Err(ParseError::Mismatch(failure)) => debug!(
            expected = failure.expected(),
            position = failure.position(),
            "parser failed"
        ),
        Err(ParseError::Fault(fault)) => error!(%fault, "engine fault while parsing"),
    }

    result
}

/// A parser waiting for its input, see [`runner`]
pub struct Runner<'p, P: ?Sized> {
    parser: &'p P,
}

impl<'p, P> Runner<'p, P>
where
    P: Parser + ?Sized,
{
    /// Run the parser over `text`, equivalent to [`run`]
    pub fn with<'code>(&self, text: &'code str) -> ParseResult<'code, P::Output> {
        run(self.parser, text)
    }
}

/// Prepare `parser` to be run, for the `runner(&parser).with(text)` call shape
pub fn runner<P>(parser: &P) -> Runner<'_, P>
where
    P: Parser + ?Sized,
{
    Runner { parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defer::defer;
    use crate::eof::eof;
    use crate::many::many;
    use crate::rest::rest;
    use crate::result::ParseResultExt;
    use crate::sequence::sequence;
    use crate::string::string;
    use pretty_assertions::assert_eq;
    use std::borrow::Cow;

    #[test]
    fn test_both_call_shapes_agree() {
        let parser = many(string("x!"));

        for text in ["", "x!", "x!x!y", "y"] {
            assert_eq!(run(&parser, text), runner(&parser).with(text));
        }
    }

    #[test]
    fn test_does_not_require_full_consumption() {
        let result = run(&string("ab"), "abc");
        assert!(result.is_success());
        assert_eq!(result.position(), Some(2));
    }

    #[test]
    fn test_runner_can_be_reused() {
        let parser = sequence((string("start"), rest()));
        let prepared = runner(&parser);

        let ((_, first), _) = prepared.with("start1").unwrap();
        let ((_, second), _) = prepared.with("start2").unwrap();
        assert_eq!(first, "1");
        assert_eq!(second, "2");
    }

    #[test]
    fn test_deterministic() {
        let parser = sequence((string("start"), eof()));

        for text in ["start", "start end", "nope"] {
            assert_eq!(run(&parser, text), run(&parser, text));
        }
    }

    #[test]
    fn test_run_dyn_parser() {
        let parser: Box<dyn Parser<Output = Cow<'static, str>>> = Box::new(string("dyn"));
        assert!(run(parser.as_ref(), "dyn").is_success());
        assert!(run(&parser, "dyn").is_success());
    }

    #[test]
    fn test_fault_surfaces_through_run() {
        let parser = defer::<()>();
        assert!(run(&parser, "").is_fault());
        assert!(runner(&parser).with("").is_fault());
    }
}
