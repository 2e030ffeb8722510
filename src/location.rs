//! Source location tracking for diagnostics.
//!
//! Provides [`Location`] to record where an AST node originated so that
//! semantic errors and IR nodes can point back at the offending source.

use std::fmt;

/// A position in script source, identified by its starting point.
///
/// Every AST node carries the location the parser recorded for it, and
/// analysis threads the location through to both errors and IR nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
    /// Length of the source text in bytes.
    pub len: u32,
}

impl Location {
    /// Create a location from a line, column, and length.
    #[inline]
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// Create a zero-length location at a position.
    #[inline]
    pub fn point(line: u32, col: u32) -> Self {
        Self { line, col, len: 0 }
    }

    /// Whether this location covers no source text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
