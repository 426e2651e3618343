//! Textual pattern language.
//!
//! A pattern is read left to right, most-significant bit first:
//!
//! - `0` / `1`: a literal bit.
//! - an ASCII letter: one bit of the variable named by that letter. Repeating
//!   the letter widens the variable; each letter may only form one contiguous run.
//! - `_`: a separator with no width. It does not end a variable run, so
//!   `"V_VV"` is one three-bit variable. Two in a row are rejected.
//!
//! ```
//! use bitmatch::part::{BitPart, PatternSpec};
//!
//! let spec = PatternSpec::parse("1_0rr").unwrap();
//! assert_eq!(
//!     spec.parts(),
//!     &[BitPart::literal(1), BitPart::literal(0), BitPart::named("r", 2)]
//! );
//! ```

use std::collections::HashSet;

use crate::{
    bits::WORD_BITS,
    errors::ParseError,
    part::{BitPart, PatternSpec},
};

/// Variable run being accumulated.
struct Run {
    name: char,
    width: u32,
}

impl Run {
    fn into_part(self) -> BitPart {
        BitPart::named(self.name, self.width)
    }
}

/// Parses `text` into a [PatternSpec]. See the module docs for the grammar.
pub fn parse(text: &str) -> Result<PatternSpec, ParseError> {
    let mut parts = Vec::with_capacity(text.len());
    let mut run: Option<Run> = None;
    let mut seen: HashSet<char> = HashSet::new();
    let mut after_separator = false;

    for (index, ch) in text.chars().enumerate() {
        match ch {
            '0' | '1' => {
                parts.extend(run.take().map(Run::into_part));
                parts.push(BitPart::Literal(if ch == '1' { 1 } else { 0 }));
                after_separator = false;
            }
            '_' => {
                if after_separator {
                    return Err(ParseError::RepeatedSeparator { index });
                }
                after_separator = true;
            }
            c if c.is_ascii_alphabetic() => {
                after_separator = false;

                if let Some(current) = run.as_mut().filter(|r| r.name == c) {
                    if current.width == WORD_BITS {
                        return Err(ParseError::VariableTooWide {
                            name: c,
                            index,
                            max: WORD_BITS,
                        });
                    }
                    current.width += 1;
                    continue;
                }

                parts.extend(run.take().map(Run::into_part));
                if !seen.insert(c) {
                    return Err(ParseError::DuplicateVariable { name: c, index });
                }
                run = Some(Run { name: c, width: 1 });
            }
            _ => return Err(ParseError::InvalidCharacter { ch, index }),
        }
    }

    parts.extend(run.take().map(Run::into_part));

    if parts.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(PatternSpec::new(parts))
}
