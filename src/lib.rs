//! # structify - Directory Structure Capture and Replication
//!
//! Captures a directory hierarchy as compact indented text, recreates a
//! hierarchy from that text, and compares two hierarchies level by level.
//!
//! ```
//! use structify::codec::{decode, encode, DecodeMode};
//! use structify::types::PathNode;
//!
//! let nodes = vec![PathNode::new(0, "src"), PathNode::new(1, "utils"), PathNode::new(0, "docs")];
//! let text = encode(&nodes);
//! assert_eq!(text.as_str(), "src\n  utils\ndocs");
//! assert_eq!(decode(text.as_str(), DecodeMode::Plain), nodes);
//! ```

// Module declarations
pub mod builder;
pub mod codec;
pub mod commands;
pub mod config;
pub mod diff;
pub mod export;
pub mod fs;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use types::{DiffRow, DiffTag, PathNode, StructifyError, StructureText};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
