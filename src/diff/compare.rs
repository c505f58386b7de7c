//! Level-by-level structure comparison

use super::StructureDiff;
use crate::types::{DiffRow, DiffTag, PathNode};
use std::collections::{BTreeMap, BTreeSet};

/// Names per depth level; duplicates collapse
pub fn names_by_level(nodes: &[PathNode]) -> BTreeMap<usize, BTreeSet<&str>> {
    let mut levels: BTreeMap<usize, BTreeSet<&str>> = BTreeMap::new();
    for node in nodes {
        levels.entry(node.depth).or_default().insert(node.name.as_str());
    }
    levels
}

/// Compare two structures level by level
///
/// Each side is reduced to a set of names per depth, so sibling order,
/// duplicate counts and parentage are not compared: a directory that moved
/// to another parent at the same level is still Common, and one that moved
/// to another level shows up as OnlyLeft plus OnlyRight.
///
/// For every level from 0 to the deepest level on either side, rows are
/// emitted as the Common block, then OnlyLeft, then OnlyRight, each sorted
/// by name. Levels with no names on either side emit nothing.
///
/// # Example
/// ```
/// use structify::diff::compare_structures;
/// use structify::types::{DiffRow, DiffTag, PathNode};
///
/// let left = vec![PathNode::new(0, "a"), PathNode::new(0, "b")];
/// let right = vec![PathNode::new(0, "b"), PathNode::new(0, "c")];
///
/// let diff = compare_structures(&left, &right);
/// assert_eq!(diff.rows, vec![
///     DiffRow::new(0, DiffTag::Common, "b"),
///     DiffRow::new(0, DiffTag::OnlyLeft, "a"),
///     DiffRow::new(0, DiffTag::OnlyRight, "c"),
/// ]);
/// ```
pub fn compare_structures(left: &[PathNode], right: &[PathNode]) -> StructureDiff {
    let left_levels = names_by_level(left);
    let right_levels = names_by_level(right);
    let empty = BTreeSet::new();

    let max_level = left_levels
        .keys()
        .chain(right_levels.keys())
        .copied()
        .max();

    let mut diff = StructureDiff::new();
    let Some(max_level) = max_level else {
        return diff;
    };

    for level in 0..=max_level {
        let left_names = left_levels.get(&level).unwrap_or(&empty);
        let right_names = right_levels.get(&level).unwrap_or(&empty);

        for name in left_names.intersection(right_names) {
            diff.add_row(DiffRow::new(level, DiffTag::Common, *name));
        }
        for name in left_names.difference(right_names) {
            diff.add_row(DiffRow::new(level, DiffTag::OnlyLeft, *name));
        }
        for name in right_names.difference(left_names) {
            diff.add_row(DiffRow::new(level, DiffTag::OnlyRight, *name));
        }
    }

    diff
}

/// Compare two structures and return only the rows
pub fn diff(left: &[PathNode], right: &[PathNode]) -> Vec<DiffRow> {
    compare_structures(left, right).rows
}
