//! Directory plan generation

use crate::types::PathNode;
use std::path::{Path, PathBuf};

/// Compute the directory paths a node sequence describes under `destination`
///
/// Keeps a stack of open ancestors starting at `destination` (the parent of
/// depth 0). For each node the stack is popped until it holds exactly
/// `depth + 1` entries, the node's path is its name joined onto the top of
/// the stack, and that path is pushed.
///
/// Depth jumps of more than one level are not rejected: the stack simply is
/// not deep enough, so the node lands under the most recent directory. Names
/// are used verbatim as path segments and are not sanitized: an absolute
/// name replaces its parent entirely (per [`Path::join`]) and `..` climbs
/// out of it, so either can place a directory outside `destination`.
///
/// # Example
/// ```
/// use structify::builder::plan_directories;
/// use structify::types::PathNode;
/// use std::path::{Path, PathBuf};
///
/// let nodes = vec![PathNode::new(0, "a"), PathNode::new(2, "b")];
/// let plan = plan_directories(Path::new("/tmp/out"), &nodes);
/// assert_eq!(plan, vec![PathBuf::from("/tmp/out/a"), PathBuf::from("/tmp/out/a/b")]);
/// ```
pub fn plan_directories(destination: &Path, nodes: &[PathNode]) -> Vec<PathBuf> {
    let mut stack: Vec<PathBuf> = vec![destination.to_path_buf()];
    let mut planned = Vec::with_capacity(nodes.len());

    for node in nodes {
        while stack.len() > node.depth + 1 {
            stack.pop();
        }

        let parent = stack.last().map(PathBuf::as_path).unwrap_or(destination);
        let current = parent.join(&node.name);
        planned.push(current.clone());
        stack.push(current);
    }

    planned
}
