//! Structure differ - per-level comparison of two node sequences

mod compare;
mod engine;

pub use compare::{compare_structures, diff, names_by_level};
pub use engine::{DiffStats, StructureDiff};
