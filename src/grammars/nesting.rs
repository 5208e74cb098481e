//! A recursive bracket grammar: `nest := "[" nest* "]"`, followed by end of input
//!
//! The rule refers to itself, so it is built around a deferred reference.

use crate::defer::defer;
use crate::eof::eof;
use crate::error::EngineFault;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::result::{ParseResult, ParseResultExt};
use crate::run::run;
use crate::sequence::sequence;
use crate::string::string;
use std::sync::LazyLock;

/// A bracket pair and the pairs nested directly inside it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nest(pub Vec<Nest>);

impl Nest {
    /// Number of bracket levels, counting this one
    pub fn depth(&self) -> usize {
        1 + self.0.iter().map(Nest::depth).max().unwrap_or(0)
    }

    /// Number of bracket pairs, counting this one
    pub fn size(&self) -> usize {
        1 + self.0.iter().map(Nest::size).sum::<usize>()
    }
}

type Grammar = Box<dyn Parser<Output = Nest> + Send + Sync>;

static GRAMMAR: LazyLock<Result<Grammar, EngineFault>> = LazyLock::new(build);

/// Build the grammar, binding the recursive rule
///
/// The rule holds a clone of its own deferred reference, so the returned
/// grammar is never freed. It is built once, into `GRAMMAR`.
fn build() -> Result<Grammar, EngineFault> {
    let nest = defer::<Nest>();
    nest.with(
        sequence((string("["), many(nest.clone()), string("]")))
            .map(|(_, children, _)| Nest(children)),
    )?;

    Ok(Box::new(sequence((nest, eof())).map(|(nest, ())| nest)))
}

/// Parse `text`, keeping the full result for diagnostics
pub fn check(text: &str) -> ParseResult<'_, Nest> {
    match &*GRAMMAR {
        Ok(grammar) => run(grammar, text),
        Err(fault) => Err(fault.clone().into()),
    }
}

/// Parse `text`, or an empty nest when it is not a single balanced group
pub fn parse(text: &str) -> Nest {
    check(text).into_value().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_pair() {
        assert_eq!(parse("[]"), Nest(vec![]));
    }

    #[test]
    fn test_nested_pairs() {
        let nest = parse("[[][[]]]");

        assert_eq!(nest, Nest(vec![Nest(vec![]), Nest(vec![Nest(vec![])])]));
        assert_eq!(nest.depth(), 3);
        assert_eq!(nest.size(), 4);
    }

    #[test]
    fn test_unclosed_pair() {
        let result = check("[[]");

        assert_eq!(result.expected(), Some("]"));
        assert_eq!(result.position(), Some(3));
    }

    #[test]
    fn test_trailing_input() {
        let result = check("[][]");

        assert_eq!(result.expected(), Some("end of input"));
        assert_eq!(result.position(), Some(2));
    }

    #[test]
    fn test_empty_input() {
        let result = check("");

        assert_eq!(result.expected(), Some("["));
        assert_eq!(parse(""), Nest::default());
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 200;
        let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));

        assert_eq!(parse(&text).depth(), depth);
    }

    #[test]
    fn test_shared_grammar_across_threads() {
        let handles: Vec<_> = (1..=4)
            .map(|depth| {
                std::thread::spawn(move || {
                    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
                    parse(&text).depth()
                })
            })
            .collect();

        let depths: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(depths, vec![1, 2, 3, 4]);
        assert!(GRAMMAR.is_ok());
    }
}
