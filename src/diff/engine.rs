//! Structure diff result type and statistics

use crate::types::{DiffRow, DiffTag};

/// Result of comparing two structures level by level
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructureDiff {
    /// Rows in emission order: by level, then Common, OnlyLeft, OnlyRight
    pub rows: Vec<DiffRow>,

    /// Aggregate statistics about the rows
    pub stats: DiffStats,
}

impl StructureDiff {
    /// Create a new empty diff
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row and update statistics
    pub fn add_row(&mut self, row: DiffRow) {
        match row.tag {
            DiffTag::Common => self.stats.common_count += 1,
            DiffTag::OnlyLeft => self.stats.only_left_count += 1,
            DiffTag::OnlyRight => self.stats.only_right_count += 1,
        }
        self.stats.max_level = Some(self.stats.max_level.map_or(row.level, |m| m.max(row.level)));
        self.rows.push(row);
    }

    /// True when both structures have the same names at every level
    pub fn is_identical(&self) -> bool {
        self.stats.only_left_count == 0 && self.stats.only_right_count == 0
    }

    /// Rows belonging to one level
    pub fn level(&self, level: usize) -> impl Iterator<Item = &DiffRow> {
        self.rows.iter().filter(move |row| row.level == level)
    }
}

/// Statistics about a structure diff
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffStats {
    /// Names found on both sides at the same level
    pub common_count: usize,

    /// Names found only on the left
    pub only_left_count: usize,

    /// Names found only on the right
    pub only_right_count: usize,

    /// Deepest level that produced a row
    pub max_level: Option<usize>,
}

impl DiffStats {
    pub fn total(&self) -> usize {
        self.common_count + self.only_left_count + self.only_right_count
    }
}
