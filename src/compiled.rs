//! Compiled patterns: precomputed masks plus capture descriptors.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    bits::{self, WORD_BITS, Word},
    errors::{CompileError, Error},
    part::{BitPart, PatternSpec},
};

/// Location of one variable segment inside the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capture {
    pub name: Option<String>,
    /// Index of the segment's most-significant bit.
    pub left_bit: u32,
    pub width: u32,
}

impl Capture {
    /// Reads this segment out of `input`.
    #[inline]
    pub fn extract(&self, input: Word) -> Word {
        bits::extract_bits(input, self.left_bit, self.width)
    }
}

/// An immutable matcher built from a [PatternSpec].
///
/// A word matches when every literal position holds the literal's value;
/// variable positions are ignored. Matching is a single XOR/AND against two masks.
///
/// # Specificity
///
/// [CompiledPattern::specificity] counts literal *parts*, not literal bits.
/// [crate::group::PatternGroup] tries patterns in descending specificity, so
/// a pattern with more literal parts wins over a looser one that also matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompiledPattern {
    name: Option<String>,
    length: u32,
    is_set_mask: Word,
    non_var_mask: Word,
    specificity: u32,
    captures: Vec<Capture>,
}

impl CompiledPattern {
    /// Compiles `spec`. Fails if it is empty, longer than [WORD_BITS], or holds
    /// an invalid part.
    pub fn compile(spec: &PatternSpec) -> Result<Self, CompileError> {
        Self::build(None, spec)
    }

    /// Like [CompiledPattern::compile], attaching `name` (e.g. a mnemonic).
    pub fn compile_named(
        name: impl Into<String>,
        spec: &PatternSpec,
    ) -> Result<Self, CompileError> {
        Self::build(Some(name.into()), spec)
    }

    /// Parses and compiles `text`; errors carry the pattern text.
    fn from_text(name: Option<String>, text: &str) -> Result<Self, Error> {
        let spec = PatternSpec::parse(text).map_err(|source| Error::Parse {
            pattern: text.to_string(),
            source,
        })?;

        Self::build(name, &spec).map_err(|source| Error::Compile {
            pattern: text.to_string(),
            source,
        })
    }

    fn build(name: Option<String>, spec: &PatternSpec) -> Result<Self, CompileError> {
        let parts = spec.parts();
        if parts.is_empty() {
            return Err(CompileError::EmptyPattern);
        }

        let total = spec.total_width();
        if total > WORD_BITS as u64 {
            return Err(CompileError::TooLong {
                length: total,
                max: WORD_BITS,
            });
        }
        let length = total as u32;

        let mut is_set_mask: Word = 0;
        let mut non_var_mask: Word = 0;
        let mut captures = Vec::new();

        // Bits still to be laid out below the current part.
        let mut remaining = length;
        for (index, part) in parts.iter().enumerate() {
            match part {
                BitPart::Literal(bit) => {
                    remaining -= 1;
                    match *bit {
                        0 => {}
                        1 => is_set_mask = bits::set_bit(is_set_mask, remaining),
                        bit => return Err(CompileError::InvalidLiteral { index, bit }),
                    }
                    non_var_mask = bits::set_bit(non_var_mask, remaining);
                }
                BitPart::Variable {
                    width,
                    name: capture_name,
                } => {
                    if *width == 0 {
                        return Err(CompileError::ZeroWidthVariable { index });
                    }
                    remaining -= width;
                    captures.push(Capture {
                        name: capture_name.clone(),
                        left_bit: remaining + width - 1,
                        width: *width,
                    });
                }
            }
        }

        let specificity = (parts.len() - captures.len()) as u32;

        debug!(
            pattern = name.as_deref(),
            length,
            specificity,
            captures = captures.len(),
            "compiled bit pattern"
        );

        Ok(CompiledPattern {
            name,
            length,
            is_set_mask,
            non_var_mask,
            specificity,
            captures,
        })
    }

    /// True when every literal position of `input` holds the expected bit.
    #[inline]
    pub fn matches(&self, input: Word) -> bool {
        !(input ^ self.is_set_mask) & self.non_var_mask == self.non_var_mask
    }

    /// Captured values in declaration order, or `None` if `input` does not match.
    ///
    /// A matching pattern without variables yields `Some` of an empty vector.
    pub fn capture(&self, input: Word) -> Option<Vec<Word>> {
        if !self.matches(input) {
            return None;
        }

        Some(self.captures.iter().map(|c| c.extract(input)).collect())
    }

    /// Capture names, parallel to the values returned by [CompiledPattern::capture].
    pub fn names(&self) -> Vec<Option<&str>> {
        self.captures.iter().map(|c| c.name.as_deref()).collect()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn is_set_mask(&self) -> Word {
        self.is_set_mask
    }

    pub fn non_var_mask(&self) -> Word {
        self.non_var_mask
    }

    /// Number of literal parts. Used only to order patterns in a group.
    pub fn specificity(&self) -> u32 {
        self.specificity
    }

    pub fn captures(&self) -> &[Capture] {
        &self.captures
    }

    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }
}

impl TryFrom<&PatternSpec> for CompiledPattern {
    type Error = CompileError;

    fn try_from(spec: &PatternSpec) -> Result<Self, Self::Error> {
        CompiledPattern::compile(spec)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::PatternDef> for CompiledPattern {
    type Error = Error;

    fn try_from(value: crate::serde::PatternDef) -> Result<Self, Self::Error> {
        CompiledPattern::from_text(value.name, &value.pattern)
    }
}

impl FromStr for CompiledPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompiledPattern::from_text(None, s)
    }
}

/// Renders the pattern in the textual language. Variable bits print as the
/// first character of their name, or `x` when unnamed or when that character
/// is not an ASCII letter. The alternate form
/// (`{:#}`) appends the masks and specificity.
impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in (0..self.length).rev() {
            if bits::get_bit(self.non_var_mask, pos) {
                let bit = if bits::get_bit(self.is_set_mask, pos) { '1' } else { '0' };
                write!(f, "{bit}")?;
                continue;
            }

            let symbol = self
                .captures
                .iter()
                .find(|c| c.left_bit >= pos && c.left_bit + 1 - c.width <= pos)
                .and_then(|c| c.name.as_deref())
                .and_then(|name| name.chars().next())
                .filter(char::is_ascii_alphabetic)
                .unwrap_or('x');
            write!(f, "{symbol}")?;
        }

        if f.alternate() {
            let width = self.length as usize;
            write!(
                f,
                " (is_set={:0width$b}, non_var={:0width$b}, specificity={})",
                self.is_set_mask, self.non_var_mask, self.specificity
            )?;
        }

        Ok(())
    }
}
