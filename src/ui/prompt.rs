//! Interactive export conflict prompt

use crate::export::ConflictPolicy;
use crate::types::StructifyError;
use console::Term;
use std::path::Path;

/// Ask on the terminal how to handle an existing export target
///
/// Fails with a configuration error when stderr is not a terminal, since
/// nobody could answer.
pub fn ask_conflict_policy(existing: &Path) -> Result<ConflictPolicy, StructifyError> {
    let term = Term::stderr();
    if !term.is_term() {
        return Err(StructifyError::Config(format!(
            "{} already exists; pass --on-conflict overwrite|number|cancel",
            existing.display()
        )));
    }

    term.write_line(&format!("The file already exists: {}", existing.display()))?;
    loop {
        term.write_str("[o]verwrite, create [n]umbered copy, or [c]ancel? ")?;
        let answer = term.read_line()?;
        match parse_conflict_answer(&answer) {
            Some(policy) => return Ok(policy),
            None => term.write_line("Please answer o, n or c.")?,
        }
    }
}

/// Map a typed answer to a policy; empty input cancels
pub fn parse_conflict_answer(answer: &str) -> Option<ConflictPolicy> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "o" | "overwrite" => Some(ConflictPolicy::Overwrite),
        "n" | "number" | "numbered" => Some(ConflictPolicy::Number),
        "c" | "cancel" | "" => Some(ConflictPolicy::Cancel),
        _ => None,
    }
}
