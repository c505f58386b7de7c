//! Core type definitions for structify

mod error;
mod node;
mod row;
mod side;

pub use error::StructifyError;
pub use node::{PathNode, StructureText};
pub use row::{DiffRow, DiffTag};
pub use side::{Side, Sides};
