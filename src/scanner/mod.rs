//! Directory scanning logic

mod filter;
mod walker;

pub use filter::ExcludeFilter;
pub use walker::{scan, ScanOptions};
