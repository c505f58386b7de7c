//! Exclude pattern matching

use crate::types::StructifyError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled exclude globs
///
/// A directory is excluded when a pattern matches either its bare name or
/// its `/`-separated path relative to the scan root.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    set: GlobSet,
    empty: bool,
}

impl ExcludeFilter {
    /// Compile a list of glob patterns
    pub fn new(patterns: &[String]) -> Result<Self, StructifyError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| StructifyError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }

        let set = builder.build().map_err(|e| StructifyError::InvalidPattern {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })?;

        Ok(Self {
            set,
            empty: patterns.is_empty(),
        })
    }

    pub fn is_excluded(&self, name: &str, relative_path: &str) -> bool {
        if self.empty {
            return false;
        }
        self.set.is_match(name) || self.set.is_match(relative_path)
    }
}
