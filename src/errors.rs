//! Error types for pattern parsing, compilation and grouping.
//!
//! Only construction can fail. Matching never returns an error: "no match" is
//! reported as `false` or `None`.

use thiserror::Error;

/// Errors produced when parsing the textual pattern language into a
/// [crate::part::PatternSpec]. Indices are character indices into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no bit parts (empty, or separators only).
    #[error("pattern is empty")]
    Empty,
    /// A character outside `0`, `1`, `_` and ASCII letters.
    #[error("invalid character {ch:?} at index {index}")]
    InvalidCharacter { ch: char, index: usize },
    /// A `_` directly following another `_`.
    #[error("repeated separator at index {index}")]
    RepeatedSeparator { index: usize },
    /// A variable letter reused after its run was closed.
    #[error("variable {name:?} reused at index {index}; each name must form one contiguous run")]
    DuplicateVariable { name: char, index: usize },
    /// A single variable run wider than the word.
    #[error("variable {name:?} exceeds {max} bits at index {index}")]
    VariableTooWide { name: char, index: usize, max: u32 },
}

/// Errors produced when compiling a [crate::part::PatternSpec] into a
/// [crate::compiled::CompiledPattern]. Indices are part indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The part list is empty.
    #[error("pattern has no parts")]
    EmptyPattern,
    /// Summed part widths exceed the word width.
    #[error("pattern is {length} bits long, at most {max} are allowed")]
    TooLong { length: u64, max: u32 },
    /// A literal part whose bit is neither 0 nor 1.
    #[error("literal part {index} has bit value {bit}, expected 0 or 1")]
    InvalidLiteral { index: usize, bit: u8 },
    /// A variable part of width 0.
    #[error("variable part {index} has zero width")]
    ZeroWidthVariable { index: usize },
}

/// Errors produced when building a [crate::group::PatternGroup].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// No patterns were supplied.
    #[error("pattern group needs at least one pattern")]
    Empty,
}

/// Any construction error, for callers chaining parse, compile and group.
///
/// Errors raised for a textual pattern carry that pattern's text; errors
/// raised while building a group from definitions also carry the entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid pattern {pattern:?}: {source}")]
    Parse { pattern: String, source: ParseError },
    #[error("cannot compile pattern {pattern:?}: {source}")]
    Compile { pattern: String, source: CompileError },
    #[error(transparent)]
    Group(#[from] GroupError),
    /// Entry `index` (0-based, in definition order) of a group definition failed.
    #[error("group entry {index}{}: {source}", .name.as_deref().map(|n| format!(" ({n})")).unwrap_or_default())]
    Entry {
        index: usize,
        name: Option<String>,
        source: Box<Error>,
    },
}
