use crate::error::CodeLoc;

/// An immutable position in a piece of text
///
/// Cursors are `Copy` values: parsers never advance a shared cursor, they
/// return a new one. Backtracking is therefore just reusing an older copy.
/// The position is a byte offset that always sits on a `char` boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextCursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> TextCursor<'code> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        TextCursor {
            source,
            position: 0,
        }
    }

    /// Byte offset of the cursor in the source
    pub fn position(&self) -> usize {
        self.position
    }

    /// The complete source text, independent of the position
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The unconsumed part of the source
    pub fn remaining(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// Check if the cursor is at the end of the source
    pub fn is_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Check if the unconsumed input starts with `literal`
    pub fn starts_with(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Move forward by `bytes`
    ///
    /// Callers must only advance over input they have matched, so the new
    /// position stays on a char boundary. Advancing past the end saturates.
    pub(crate) fn advance(self, bytes: usize) -> Self {
        TextCursor {
            source: self.source,
            position: (self.position + bytes).min(self.source.len()),
        }
    }

    /// A cursor at the end of the same source
    pub fn to_end(self) -> Self {
        TextCursor {
            source: self.source,
            position: self.source.len(),
        }
    }

    /// Location of the cursor for diagnostics
    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.source, self.position)
    }
}
