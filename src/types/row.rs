//! DiffRow - Classification rows produced by the structure differ

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side(s) of a comparison a name was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiffTag {
    /// Present on both sides at this level
    Common,

    /// Present only in the left structure
    OnlyLeft,

    /// Present only in the right structure
    OnlyRight,
}

impl DiffTag {
    /// Tag seen from the other side of the comparison
    pub fn mirrored(self) -> Self {
        match self {
            DiffTag::Common => DiffTag::Common,
            DiffTag::OnlyLeft => DiffTag::OnlyRight,
            DiffTag::OnlyRight => DiffTag::OnlyLeft,
        }
    }

    /// Two-character gutter used by the text rendering
    pub fn marker(self) -> &'static str {
        match self {
            DiffTag::Common => "  ",
            DiffTag::OnlyLeft => "L ",
            DiffTag::OnlyRight => "R ",
        }
    }
}

impl fmt::Display for DiffTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiffTag::Common => "common",
            DiffTag::OnlyLeft => "only-left",
            DiffTag::OnlyRight => "only-right",
        };
        f.write_str(label)
    }
}

/// One (level, tag, name) row of a structure comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffRow {
    pub level: usize,
    pub tag: DiffTag,
    pub name: String,
}

impl DiffRow {
    pub fn new(level: usize, tag: DiffTag, name: impl Into<String>) -> Self {
        Self {
            level,
            tag,
            name: name.into(),
        }
    }
}
