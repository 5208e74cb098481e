//! # SigmaComb - Parser Combinator Engine
//!
//! Small composable parsers that are assembled into grammars directly in Rust,
//! without a separate parser generator or lexing phase.
//!
//! SigmaComb provides:
//!
//! - **Backtracking by construction**: cursors are immutable values, a failed
//!   branch simply never hands its cursor back
//! - **Precise diagnostics**: failures keep the expectation and position of
//!   the most specific mismatch, rendered with line and context
//! - **Recursive grammars**: [`defer`] creates a rule before it is defined
//! - **Misuse is not a mismatch**: using an unbound rule is an [`EngineFault`],
//!   which no combinator swallows
//!
//! ```
//! use sigmacomb::{eof, many, run, sequence, string, ParseResultExt};
//!
//! let parser = sequence((many(string("x!")), eof()));
//!
//! let ((items, ()), _) = run(&parser, "x!x!x!").unwrap();
//! assert_eq!(items.len(), 3);
//!
//! let result = run(&parser, "x!x!y");
//! assert_eq!(result.expected(), Some("end of input"));
//! assert_eq!(result.position(), Some(4));
//! ```

pub mod cursor;
pub mod defer;
pub mod eof;
pub mod error;
pub mod grammars;
pub mod many;
pub mod map;
pub mod or;
pub mod parser;
pub mod rest;
pub mod result;
pub mod run;
pub mod sequence;
pub mod string;

pub use cursor::TextCursor;
pub use defer::{Defer, defer};
pub use eof::eof;
pub use error::{CodeLoc, EngineFault, Failure, ParseError};
pub use many::many;
pub use map::{MapExt, map};
pub use or::{OrExt, or};
pub use parser::Parser;
pub use rest::rest;
pub use result::{ParseResult, ParseResultExt, failure, success};
pub use run::{Runner, run, runner};
pub use sequence::sequence;
pub use string::string;
