//! PathNode and StructureText - the two shapes a directory hierarchy takes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single directory in a structure sequence
///
/// Nodes only make sense inside an ordered sequence: the sequence is a
/// pre-order traversal, so a node's parent is the nearest preceding node
/// with `depth - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathNode {
    /// Zero-based nesting level below the scanned root
    pub depth: usize,

    /// Directory name (a single path segment)
    pub name: String,
}

impl PathNode {
    /// Create a new node
    pub fn new(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
        }
    }
}

impl<S: Into<String>> From<(usize, S)> for PathNode {
    fn from((depth, name): (usize, S)) -> Self {
        Self::new(depth, name)
    }
}

/// Indented-text serialization of a node sequence
///
/// This is the value passed between scan, export, import, replicate and
/// diff. Lines are separated by `\n`; a trailing newline is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureText(String);

impl StructureText {
    /// Wrap raw text (from a file, stdin or an editor buffer)
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the underlying text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the raw lines
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.0.lines()
    }

    /// True when the text holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for StructureText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for StructureText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for StructureText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StructureText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_from_tuple() {
        let node: PathNode = (2, "src").into();
        assert_eq!(node, PathNode::new(2, "src"));
    }

    #[test]
    fn test_structure_text_blank() {
        assert!(StructureText::new("  \n\n ").is_blank());
        assert!(!StructureText::new("a").is_blank());
        assert!(StructureText::default().is_blank());
    }

    #[test]
    fn test_structure_text_lines() {
        let text = StructureText::from("a\n  b\n");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["a", "  b"]);
    }
}
