//! Terminal presentation: diff rendering and prompts

mod diff_view;
mod prompt;

pub use diff_view::{format_diff_summary, render_diff};
pub use prompt::{ask_conflict_policy, parse_conflict_answer};
