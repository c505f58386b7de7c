//! Terminal rendering of structure diffs

use crate::codec::INDENT;
use crate::diff::{DiffStats, StructureDiff};
use crate::types::{DiffRow, DiffTag};
use console::Style;

/// Render diff rows as text, one row per line
///
/// Each line is the tag marker (`"  "`, `"L "` or `"R "`), the level's
/// indentation and the name. Consecutive levels are separated by a blank
/// line. With `color`, common rows are green and one-sided rows red.
pub fn render_diff(diff: &StructureDiff, color: bool) -> String {
    let Some(max_level) = diff.stats.max_level else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(diff.rows.len() + max_level);
    for level in 0..=max_level {
        for row in diff.level(level) {
            lines.push(render_row(row, color));
        }
        if level < max_level {
            lines.push(String::new());
        }
    }
    lines.join("\n")
}

fn render_row(row: &DiffRow, color: bool) -> String {
    let line = format!("{}{}{}", row.tag.marker(), INDENT.repeat(row.level), row.name);
    if !color {
        return line;
    }
    style_for(row.tag).apply_to(line).to_string()
}

fn style_for(tag: DiffTag) -> Style {
    let style = Style::new().force_styling(true);
    match tag {
        DiffTag::Common => style.green(),
        DiffTag::OnlyLeft | DiffTag::OnlyRight => style.red(),
    }
}

/// One-line count summary shown under the rendered rows
pub fn format_diff_summary(stats: &DiffStats) -> String {
    if stats.only_left_count == 0 && stats.only_right_count == 0 {
        return format!(
            "Structures match at every level ({} common).",
            stats.total()
        );
    }
    format!(
        "Common: {}  Only left: {}  Only right: {}",
        stats.common_count, stats.only_left_count, stats.only_right_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare_structures;
    use crate::types::PathNode;

    fn nodes(items: &[(usize, &str)]) -> Vec<PathNode> {
        items.iter().map(|&(d, n)| PathNode::new(d, n)).collect()
    }

    #[test]
    fn test_render_plain_rows_and_level_gaps() {
        let diff = compare_structures(
            &nodes(&[(0, "a"), (0, "b"), (1, "x")]),
            &nodes(&[(0, "b"), (0, "c"), (1, "x")]),
        );
        assert_eq!(render_diff(&diff, false), "  b\nL a\nR c\n\n    x");
    }

    #[test]
    fn test_render_empty_diff() {
        assert_eq!(render_diff(&StructureDiff::new(), false), "");
    }

    #[test]
    fn test_render_color_adds_escape_codes() {
        let diff = compare_structures(&nodes(&[(0, "a")]), &nodes(&[(0, "a")]));
        let rendered = render_diff(&diff, true);
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("  a"));
    }

    #[test]
    fn test_summary_counts() {
        let diff = compare_structures(&nodes(&[(0, "a"), (0, "b")]), &nodes(&[(0, "b")]));
        assert_eq!(
            format_diff_summary(&diff.stats),
            "Common: 1  Only left: 1  Only right: 0"
        );
    }

    #[test]
    fn test_summary_identical() {
        let diff = compare_structures(&nodes(&[(0, "a")]), &nodes(&[(0, "a")]));
        assert!(format_diff_summary(&diff.stats).contains("match at every level"));
    }
}
