//! Indent codec - PathNode sequences to indented text and back
//!
//! One line per node: `"  " * depth` followed by the name. Decoding is
//! lenient: it never fails, and anything odd about the input is reported
//! as a [`DecodeWarning`] next to the nodes instead of being rejected.

use crate::types::{PathNode, StructureText};
use std::fmt;

/// Indentation emitted per depth level
pub const INDENT: &str = "  ";

/// Width of one indentation level, in characters
pub const INDENT_WIDTH: usize = INDENT.len();

/// Lines starting with this marker are annotations in curated files
pub const COMMENT_MARKER: char = '#';

/// How [`decode`] treats comment lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Every non-blank line is a node. Lossless for `encode` output.
    #[default]
    Plain,

    /// Lines whose content starts with `#` are dropped
    Curated,
}

/// Non-fatal oddity found while decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Indentation is not a multiple of the indent width; depth was rounded down
    UnevenIndent { line: usize, width: usize },

    /// Indentation contains whitespace other than plain spaces
    MixedIndent { line: usize },

    /// Depth grew by more than one level since the previous node
    DepthJump {
        line: usize,
        from: usize,
        to: usize,
    },

    /// First node is not at depth 0
    IndentedFirstNode { line: usize, depth: usize },
}

impl DecodeWarning {
    /// 1-based line number in the decoded text
    pub fn line(&self) -> usize {
        match self {
            DecodeWarning::UnevenIndent { line, .. }
            | DecodeWarning::MixedIndent { line }
            | DecodeWarning::DepthJump { line, .. }
            | DecodeWarning::IndentedFirstNode { line, .. } => *line,
        }
    }
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::UnevenIndent { line, width } => write!(
                f,
                "line {line}: indentation of {width} is not a multiple of {INDENT_WIDTH}"
            ),
            DecodeWarning::MixedIndent { line } => {
                write!(f, "line {line}: indentation contains non-space whitespace")
            }
            DecodeWarning::DepthJump { line, from, to } => {
                write!(f, "line {line}: depth jumps from {from} to {to}")
            }
            DecodeWarning::IndentedFirstNode { line, depth } => {
                write!(f, "line {line}: first entry starts at depth {depth}")
            }
        }
    }
}

/// Decoded nodes plus the warnings collected on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    pub nodes: Vec<PathNode>,
    pub warnings: Vec<DecodeWarning>,
}

/// Render nodes as indented text, one line per node, in input order
///
/// Lines are joined with `\n` and no trailing newline is added. Empty input
/// gives empty text.
pub fn encode(nodes: &[PathNode]) -> StructureText {
    let lines: Vec<String> = nodes
        .iter()
        .map(|node| format!("{}{}", INDENT.repeat(node.depth), node.name))
        .collect();
    StructureText::from(lines.join("\n"))
}

/// Parse indented text into nodes
pub fn decode(text: &str, mode: DecodeMode) -> Vec<PathNode> {
    decode_report(text, mode).nodes
}

/// Parse indented text into nodes, keeping track of malformed indentation
pub fn decode_report(text: &str, mode: DecodeMode) -> DecodeReport {
    let mut report = DecodeReport::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }

        let content = line.trim_start();
        if mode == DecodeMode::Curated && content.starts_with(COMMENT_MARKER) {
            continue;
        }

        let indent = &line[..line.len() - content.len()];
        let width = indent.chars().count();
        let depth = width / INDENT_WIDTH;

        if indent.chars().any(|c| c != ' ') {
            report.warnings.push(DecodeWarning::MixedIndent { line: line_no });
        }
        if width % INDENT_WIDTH != 0 {
            report
                .warnings
                .push(DecodeWarning::UnevenIndent { line: line_no, width });
        }
        match report.nodes.last() {
            None if depth > 0 => report
                .warnings
                .push(DecodeWarning::IndentedFirstNode { line: line_no, depth }),
            Some(prev) if depth > prev.depth + 1 => report.warnings.push(DecodeWarning::DepthJump {
                line: line_no,
                from: prev.depth,
                to: depth,
            }),
            _ => {}
        }

        report.nodes.push(PathNode::new(depth, content));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(items: &[(usize, &str)]) -> Vec<PathNode> {
        items.iter().map(|&(d, n)| PathNode::new(d, n)).collect()
    }

    #[test]
    fn test_encode_example_tree() {
        let input = nodes(&[(0, "src"), (1, "utils"), (1, "core"), (0, "docs")]);
        assert_eq!(encode(&input).as_str(), "src\n  utils\n  core\ndocs");
    }

    #[test]
    fn test_encode_empty_is_empty_text() {
        let text = encode(&[]);
        assert_eq!(text.as_str(), "");
        assert_eq!(text.lines().count(), 0);
    }

    #[test]
    fn test_encode_keeps_input_order() {
        let input = nodes(&[(0, "z"), (0, "a")]);
        assert_eq!(encode(&input).as_str(), "z\na");
    }

    #[test]
    fn test_decode_example_tree() {
        let decoded = decode("src\n  utils\n  core\ndocs\n", DecodeMode::Plain);
        assert_eq!(
            decoded,
            nodes(&[(0, "src"), (1, "utils"), (1, "core"), (0, "docs")])
        );
    }

    #[test]
    fn test_decode_drops_blank_and_whitespace_lines() {
        let decoded = decode("a\n\n    \n  b\n", DecodeMode::Plain);
        assert_eq!(decoded, nodes(&[(0, "a"), (1, "b")]));
    }

    #[test]
    fn test_decode_odd_indent_truncates() {
        let report = decode_report("a\n   b", DecodeMode::Plain);
        assert_eq!(report.nodes, nodes(&[(0, "a"), (1, "b")]));
        assert_eq!(
            report.warnings,
            vec![DecodeWarning::UnevenIndent { line: 2, width: 3 }]
        );
    }

    #[test]
    fn test_decode_trims_name() {
        let decoded = decode("  name with spaces   ", DecodeMode::Plain);
        assert_eq!(decoded, nodes(&[(1, "name with spaces")]));
    }

    #[test]
    fn test_curated_mode_skips_comments_before_depth() {
        let decoded = decode("# note\n  keep\n", DecodeMode::Curated);
        assert_eq!(decoded, nodes(&[(1, "keep")]));
    }

    #[test]
    fn test_curated_mode_skips_indented_comments() {
        let decoded = decode("a\n  # about b\n  b", DecodeMode::Curated);
        assert_eq!(decoded, nodes(&[(0, "a"), (1, "b")]));
    }

    #[test]
    fn test_plain_mode_keeps_comment_like_names() {
        let decoded = decode("#tag\n  b", DecodeMode::Plain);
        assert_eq!(decoded, nodes(&[(0, "#tag"), (1, "b")]));
    }

    #[test]
    fn test_decode_handles_crlf() {
        let decoded = decode("a\r\n  b\r\n", DecodeMode::Plain);
        assert_eq!(decoded, nodes(&[(0, "a"), (1, "b")]));
    }

    #[test]
    fn test_depth_jump_is_reported_not_rejected() {
        let report = decode_report("a\n    b", DecodeMode::Plain);
        assert_eq!(report.nodes, nodes(&[(0, "a"), (2, "b")]));
        assert_eq!(
            report.warnings,
            vec![DecodeWarning::DepthJump {
                line: 2,
                from: 0,
                to: 2
            }]
        );
    }

    #[test]
    fn test_tab_indent_counts_as_one_column() {
        let report = decode_report("a\n\t\tb", DecodeMode::Plain);
        assert_eq!(report.nodes, nodes(&[(0, "a"), (1, "b")]));
        assert!(report
            .warnings
            .contains(&DecodeWarning::MixedIndent { line: 2 }));
    }

    #[test]
    fn test_indented_first_node_warning() {
        let report = decode_report("\n  a", DecodeMode::Plain);
        assert_eq!(
            report.warnings,
            vec![DecodeWarning::IndentedFirstNode { line: 2, depth: 1 }]
        );
        assert_eq!(report.warnings[0].line(), 2);
    }

    #[test]
    fn test_warning_display_mentions_line() {
        let warning = DecodeWarning::DepthJump {
            line: 7,
            from: 1,
            to: 4,
        };
        assert_eq!(warning.to_string(), "line 7: depth jumps from 1 to 4");
    }

    #[test]
    fn test_round_trip_scanner_shaped_sequence() {
        let input = nodes(&[
            (0, "a"),
            (1, "b"),
            (2, "c"),
            (1, "d"),
            (0, "e"),
            (1, "with space"),
        ]);
        assert_eq!(decode(encode(&input).as_str(), DecodeMode::Plain), input);
    }
}
