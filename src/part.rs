//! Pattern vocabulary: the [BitPart]s a [PatternSpec] is built from.

use crate::{
    compiled::CompiledPattern,
    errors::{CompileError, ParseError},
};

/// One element of a pattern, read MSB-first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BitPart {
    /// A single bit that must equal the given value (0 or 1).
    Literal(u8),
    /// A run of `width` bits matching any value; contributes one capture.
    Variable { width: u32, name: Option<String> },
}

impl BitPart {
    /// A literal bit; `bit` must be 0 or 1, checked at compile time.
    pub fn literal(bit: u8) -> Self {
        BitPart::Literal(bit)
    }

    /// An unnamed variable segment.
    pub fn variable(width: u32) -> Self {
        BitPart::Variable { width, name: None }
    }

    /// A variable segment whose capture is reported under `name`.
    pub fn named(name: impl Into<String>, width: u32) -> Self {
        BitPart::Variable {
            width,
            name: Some(name.into()),
        }
    }

    /// Number of bits this part covers.
    pub fn width(&self) -> u32 {
        match self {
            BitPart::Literal(_) => 1,
            BitPart::Variable { width, .. } => *width,
        }
    }

    /// True for [BitPart::Variable].
    pub fn is_variable(&self) -> bool {
        matches!(self, BitPart::Variable { .. })
    }
}

/// An ordered list of [BitPart]s. The first part holds the most-significant bits.
///
/// Build it directly from parts, or with [PatternSpec::parse] from the textual
/// form. Built directly, two variable parts may share a name; the parser rejects
/// that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternSpec {
    parts: Vec<BitPart>,
}

impl PatternSpec {
    /// Wraps `parts` as given; nothing is validated until compilation.
    pub fn new(parts: Vec<BitPart>) -> Self {
        PatternSpec { parts }
    }

    /// Parses the textual pattern language, e.g. `"1_01V_VV"`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        crate::parser::parse(text)
    }

    /// Parts in declaration order, most-significant first.
    pub fn parts(&self) -> &[BitPart] {
        &self.parts
    }

    /// Sum of all part widths. Computed in 64 bits so oversized specs can be reported.
    pub fn total_width(&self) -> u64 {
        self.parts.iter().map(|part| part.width() as u64).sum()
    }

    pub fn push(&mut self, part: BitPart) -> &mut Self {
        self.parts.push(part);
        self
    }

    pub fn compile(&self) -> Result<CompiledPattern, CompileError> {
        CompiledPattern::compile(self)
    }

    pub fn compile_named(&self, name: impl Into<String>) -> Result<CompiledPattern, CompileError> {
        CompiledPattern::compile_named(name, self)
    }
}

impl From<Vec<BitPart>> for PatternSpec {
    fn from(parts: Vec<BitPart>) -> Self {
        PatternSpec::new(parts)
    }
}

impl FromIterator<BitPart> for PatternSpec {
    fn from_iter<I: IntoIterator<Item = BitPart>>(iter: I) -> Self {
        PatternSpec::new(iter.into_iter().collect())
    }
}
