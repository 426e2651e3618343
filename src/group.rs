//! Pattern group: a specificity-ordered set of [CompiledPattern]s used to
//! dispatch a word to its most specific match.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::{bits::Word, compiled::CompiledPattern, errors::GroupError};

/// Immutable, specificity-ordered set of compiled patterns. Use
/// [PatternGroup::new] to build, then [PatternGroup::find] or
/// [PatternGroup::decode] to dispatch words.
///
/// Patterns are tried from most to least specific and the first match wins.
/// The relative order of patterns with equal specificity is unspecified: when
/// two such patterns overlap, which one is reported is implementation-defined
/// and is not tied to the order they were passed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternGroup {
    patterns: Vec<CompiledPattern>,
}

impl PatternGroup {
    /// Builds a group. Fails if `patterns` is empty.
    pub fn new(mut patterns: Vec<CompiledPattern>) -> Result<Self, GroupError> {
        if patterns.is_empty() {
            return Err(GroupError::Empty);
        }

        patterns.sort_unstable_by(|a, b| b.specificity().cmp(&a.specificity()));

        debug!(patterns = patterns.len(), "built pattern group");

        Ok(PatternGroup { patterns })
    }

    /// The most specific pattern matching `input`, if any.
    pub fn find(&self, input: Word) -> Option<&CompiledPattern> {
        let found = self.patterns.iter().find(|p| p.matches(input));
        trace!(input, matched = found.and_then(|p| p.name()), "dispatched word");
        found
    }

    /// Like [PatternGroup::find], also extracting the matched pattern's captures.
    pub fn decode(&self, input: Word) -> Option<Decoded<'_>> {
        let pattern = self.find(input)?;
        let values = pattern.captures().iter().map(|c| c.extract(input)).collect();
        Some(Decoded { pattern, values })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false; a group holds at least one pattern.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in dispatch order.
    pub fn iter(&self) -> std::slice::Iter<'_, CompiledPattern> {
        self.patterns.iter()
    }
}

impl TryFrom<Vec<CompiledPattern>> for PatternGroup {
    type Error = GroupError;

    fn try_from(patterns: Vec<CompiledPattern>) -> Result<Self, Self::Error> {
        PatternGroup::new(patterns)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::GroupDef> for PatternGroup {
    type Error = crate::errors::Error;

    fn try_from(value: crate::serde::GroupDef) -> Result<Self, Self::Error> {
        let patterns = value
            .patterns
            .into_iter()
            .enumerate()
            .map(|(index, def)| {
                let name = def.name.clone();
                CompiledPattern::try_from(def).map_err(|source| crate::errors::Error::Entry {
                    index,
                    name,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PatternGroup::new(patterns)?)
    }
}

impl<'a> IntoIterator for &'a PatternGroup {
    type Item = &'a CompiledPattern;
    type IntoIter = std::slice::Iter<'a, CompiledPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A word matched against a group: the winning pattern and its captured values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<'a> {
    pattern: &'a CompiledPattern,
    values: Vec<Word>,
}

impl<'a> Decoded<'a> {
    pub fn pattern(&self) -> &'a CompiledPattern {
        self.pattern
    }

    /// Captured values in declaration order.
    pub fn values(&self) -> &[Word] {
        &self.values
    }

    /// Value of the first capture called `name`.
    pub fn get(&self, name: &str) -> Option<Word> {
        self.pattern
            .captures()
            .iter()
            .position(|c| c.name.as_deref() == Some(name))
            .map(|i| self.values[i])
    }

    /// Named captures as a map. Unnamed captures are left out; for a repeated
    /// name the first capture wins.
    pub fn to_map(&self) -> BTreeMap<String, Word> {
        let mut map = BTreeMap::new();

        for (capture, value) in self.pattern.captures().iter().zip(&self.values) {
            if let Some(name) = &capture.name {
                map.entry(name.clone()).or_insert(*value);
            }
        }

        map
    }
}
