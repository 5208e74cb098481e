use std::borrow::Cow;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A position in a source text, used to render diagnostics
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// Byte offset in `code` where the failure was detected
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn code(&self) -> &'code str {
        self.code
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Byte offsets are reported instead of columns: a column depends on
    /// tab width and on how multi-byte characters are rendered, the byte
    /// offset does not.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.code.bytes().enumerate() {
            if i >= self.loc {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.loc.saturating_sub(line_start),
        }
    }

    /// Up to two lines of context on each side of the failing line, with a
    /// pointer under the failing position
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        writeln!(
            f,
            "line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.loc
        )?;
        writeln!(f)?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A grammar-level mismatch: the input at `loc` is not what the parser expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<'code> {
    /// The expected label, or `"a" or "b"` once alternatives were merged
    expected: Cow<'static, str>,
    /// Every label that was tried at `loc`; empty while there is only one
    alternatives: Vec<Cow<'static, str>>,
    loc: CodeLoc<'code>,
}

impl<'code> Failure<'code> {
    pub fn new(expected: impl Into<Cow<'static, str>>, loc: CodeLoc<'code>) -> Self {
        Self {
            expected: expected.into(),
            alternatives: Vec::new(),
            loc,
        }
    }

    /// Human readable description of what would have matched
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The labels that were tried at this position
    pub fn alternatives(&self) -> Vec<&str> {
        if self.alternatives.is_empty() {
            vec![self.expected.as_ref()]
        } else {
            self.alternatives.iter().map(|a| a.as_ref()).collect()
        }
    }

    pub fn position(&self) -> usize {
        self.loc.position()
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    /// Pick the failure that got furthest into the input
    ///
    /// When both stopped at the same position their expectations are
    /// combined, so the diagnostic lists every alternative that was tried.
    /// A label is listed once even if several alternatives expected it.
    pub fn furthest(self, other: Failure<'code>) -> Failure<'code> {
        match self.position().cmp(&other.position()) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => self.merge(other),
        }
    }

    fn merge(self, other: Failure<'code>) -> Failure<'code> {
        let loc = self.loc;
        let mut alternatives = self.into_alternatives();
        for label in other.into_alternatives() {
            if !alternatives.contains(&label) {
                alternatives.push(label);
            }
        }

        if alternatives.len() == 1 {
            return Failure {
                expected: alternatives.remove(0),
                alternatives: Vec::new(),
                loc,
            };
        }

        let expected = alternatives
            .iter()
            .map(|label| format!("\"{}\"", label))
            .collect::<Vec<_>>()
            .join(" or ");

        Failure {
            expected: expected.into(),
            alternatives,
            loc,
        }
    }

    fn into_alternatives(self) -> Vec<Cow<'static, str>> {
        if self.alternatives.is_empty() {
            vec![self.expected]
        } else {
            self.alternatives
        }
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alternatives.is_empty() {
            write!(f, "expected '{}' at {}", self.expected, self.loc)
        } else {
            write!(f, "expected {} at {}", self.expected, self.loc)
        }
    }
}

impl Error for Failure<'_> {}

/// Misuse of the engine itself, as opposed to input that does not match
///
/// A fault means the grammar was wired up incorrectly. Combinators never
/// absorb faults, so they always reach the caller of [`crate::run`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineFault {
    #[error("deferred parser for `{target}` was invoked before it was bound")]
    Unbound { target: &'static str },
    #[error("deferred parser for `{target}` is already bound")]
    AlreadyBound { target: &'static str },
}

/// Either kind of parse failure
///
/// `From` is written out by hand: a source error that borrows the input
/// cannot go through `#[from]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError<'code> {
    #[error(transparent)]
    Mismatch(Failure<'code>),
    #[error(transparent)]
    Fault(EngineFault),
}

impl<'code> From<Failure<'code>> for ParseError<'code> {
    fn from(failure: Failure<'code>) -> Self {
        ParseError::Mismatch(failure)
    }
}

impl From<EngineFault> for ParseError<'_> {
    fn from(fault: EngineFault) -> Self {
        ParseError::Fault(fault)
    }
}

impl<'code> ParseError<'code> {
    /// The mismatch, if this is an ordinary grammar failure
    pub fn as_mismatch(&self) -> Option<&Failure<'code>> {
        match self {
            ParseError::Mismatch(failure) => Some(failure),
            ParseError::Fault(_) => None,
        }
    }

    pub fn as_fault(&self) -> Option<&EngineFault> {
        match self {
            ParseError::Mismatch(_) => None,
            ParseError::Fault(fault) => Some(fault),
        }
    }
}
