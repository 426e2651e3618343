//! JSON-deserializable pattern definitions.
//!
//! These types describe a decoder table, for example one shipped as a
//! configuration file alongside an emulator, and are converted into a
//! [crate::group::PatternGroup] with `TryFrom`:
//!
//! ```json
//! {
//!   "patterns": [
//!     { "name": "add", "pattern": "0001_dddd_ssss_iiii" },
//!     { "name": "nop", "pattern": "0000_0000_0000_0000" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A single pattern in the textual language, optionally named.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PatternDef {
    /// Name attached to the compiled pattern (e.g. an instruction mnemonic).
    #[serde(default)]
    pub name: Option<String>,
    /// Pattern text, e.g. `"01V"`.
    pub pattern: String,
}

/// A set of patterns to be dispatched together.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GroupDef {
    pub patterns: Vec<PatternDef>,
}

#[cfg(test)]
mod tests {
    use crate::{
        compiled::CompiledPattern,
        errors::{Error, GroupError, ParseError},
        group::PatternGroup,
    };

    use super::*;

    #[test]
    fn test_group_from_json() {
        let json = r#"{
            "patterns": [
                { "name": "add", "pattern": "0001_dddd_ssss_iiii" },
                { "name": "nop", "pattern": "0000_0000_0000_0000" },
                { "pattern": "1xxx_xxxx_xxxx_xxxx" }
            ]
        }"#;

        let def: GroupDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.patterns[2].name, None);

        let group = PatternGroup::try_from(def).unwrap();
        assert_eq!(group.len(), 3);
        assert_eq!(group.find(0).and_then(|p| p.name()), Some("nop"));

        let add = group.decode(0x1234).unwrap();
        assert_eq!(add.pattern().name(), Some("add"));
        assert_eq!(add.values(), &[2, 3, 4]);

        let unnamed = group.find(0x8000).unwrap();
        assert_eq!(unnamed.name(), None);
    }

    #[test]
    fn test_pattern_def_errors() {
        let def = PatternDef {
            name: Some("bad".to_string()),
            pattern: "10__1".to_string(),
        };
        assert_eq!(
            CompiledPattern::try_from(def),
            Err(Error::Parse {
                pattern: "10__1".to_string(),
                source: ParseError::RepeatedSeparator { index: 3 },
            })
        );

        let def = GroupDef { patterns: vec![] };
        assert_eq!(
            PatternGroup::try_from(def),
            Err(Error::Group(GroupError::Empty))
        );
    }

    #[test]
    fn test_group_error_reports_failing_entry() {
        let json = r#"{
            "patterns": [
                { "name": "add", "pattern": "0001_dddd_ssss_iiii" },
                { "name": "ld", "pattern": "0010__dddd" }
            ]
        }"#;

        let def: GroupDef = serde_json::from_str(json).unwrap();
        let err = PatternGroup::try_from(def).unwrap_err();
        assert_eq!(
            err,
            Error::Entry {
                index: 1,
                name: Some("ld".to_string()),
                source: Box::new(Error::Parse {
                    pattern: "0010__dddd".to_string(),
                    source: ParseError::RepeatedSeparator { index: 5 },
                }),
            }
        );
        assert_eq!(
            err.to_string(),
            "group entry 1 (ld): invalid pattern \"0010__dddd\": repeated separator at index 5"
        );
    }
}
