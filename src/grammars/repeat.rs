//! The repetition benchmark grammar: `many("x!")`
//!
//! Available in the two construction strategies that the benchmarks compare.

use crate::defer::{Defer, defer};
use crate::error::EngineFault;
use crate::many::{Many, many};
use crate::result::ParseResultExt;
use crate::run::runner;
use crate::string::{StringParser, string};
use std::borrow::Cow;
use std::sync::LazyLock;

pub const ITEM: &str = "x!";

type Items = Vec<Cow<'static, str>>;

/// The parser tree held directly
static GRAMMAR: LazyLock<Many<StringParser>> = LazyLock::new(|| many(string(ITEM)));

/// The same tree reached through a deferred reference bound on first use
static DEFERRED: LazyLock<Result<Defer<Items>, EngineFault>> = LazyLock::new(|| {
    let rule = defer();
    rule.with(many(string(ITEM)))?;
    Ok(rule)
});

/// Parse as many items as possible, using the grammar-built strategy
pub fn parse(text: &str) -> Items {
    runner(&*GRAMMAR).with(text).into_value().unwrap_or_default()
}

/// Parse as many items as possible, using the lazily-deferred strategy
pub fn parse_deferred(text: &str) -> Items {
    match &*DEFERRED {
        Ok(rule) => runner(rule).with(text).into_value().unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_counts_items() {
        assert_eq!(parse("x!x!x!y"), vec!["x!", "x!", "x!"]);
    }

    #[test]
    fn test_parse_without_items() {
        assert!(parse("").is_empty());
        assert!(parse("y").is_empty());
    }

    #[test]
    fn test_strategies_agree() {
        for text in ["", "x!", "x!x", "x!x!x!x!", "yx!"] {
            assert_eq!(parse(text), parse_deferred(text));
        }
    }

    #[test]
    fn test_large_input() {
        let text = ITEM.repeat(10_000);
        assert_eq!(parse(&text).len(), 10_000);
        assert_eq!(parse_deferred(&text).len(), 10_000);
    }
}
