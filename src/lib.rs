//! # bitmatch
//!
//! Declarative bit patterns for decoding fixed-width words, such as CPU
//! instruction encodings.
//!
//! A pattern mixes literal bits with named variable segments, most-significant
//! bit first. Patterns compile into a pair of masks and a list of capture
//! descriptors; a [group::PatternGroup] dispatches a word to the most specific
//! pattern that matches it and extracts that pattern's fields.
//!
//! ## Example
//!
//! ```
//! use bitmatch::compiled::CompiledPattern;
//! use bitmatch::group::PatternGroup;
//! use bitmatch::part::PatternSpec;
//!
//! let mov = PatternSpec::parse("01_dd_ss").unwrap().compile_named("mov").unwrap();
//! let halt = PatternSpec::parse("01_11_11").unwrap().compile_named("halt").unwrap();
//!
//! let group = PatternGroup::new(vec![mov, halt]).unwrap();
//!
//! let decoded = group.decode(0b01_10_01).unwrap();
//! assert_eq!(decoded.pattern().name(), Some("mov"));
//! assert_eq!(decoded.get("d"), Some(0b10));
//! assert_eq!(decoded.get("s"), Some(0b01));
//!
//! // The all-literal encoding is more specific than `mov`, so it wins.
//! assert_eq!(group.find(0b01_11_11).and_then(CompiledPattern::name), Some("halt"));
//! ```
//!
//! ## Features
//!
//! - `serde`: JSON-deserializable `PatternDef` / `GroupDef`
//!   definitions that convert into compiled patterns and groups.

pub mod bits;
pub mod compiled;
pub mod errors;
pub mod group;
pub mod parser;
pub mod part;
#[cfg(feature = "serde")]
pub mod serde;
