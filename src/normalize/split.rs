//! Multi-valued cell splitting rules
//!
//! Two split policies apply to the curated sheet:
//!
//! - Tumor and tissue cells split on every comma, each token trimmed. Empty
//!   tokens are preserved as empty strings: dropping them would misalign the
//!   per-source entry counts.
//! - Variant cells split on a comma only when it is followed by optional
//!   whitespace and the start of a new variant descriptor: an ASCII
//!   uppercase letter, or an HGVS prefix (`p.`, `c.`, `g.`). Variant
//!   descriptions that contain a comma with a lowercase continuation
//!   ("exon 19 deletion, in-frame") stay in one token.
//!
//! An entirely empty cell yields the single empty-string token so the source
//! row survives cross-expansion.

use crate::{Error, Result};

/// Split a tumor/tissue cell on commas, trimming each token.
///
/// Empty tokens produced by the split are kept. An empty cell yields one
/// empty token.
#[must_use]
pub fn split_list(cell: &str) -> Vec<String> {
    if cell.trim().is_empty() {
        return vec![String::new()];
    }
    cell.split(',').map(|token| token.trim().to_string()).collect()
}

/// Split a variant cell on commas that precede a new variant descriptor.
///
/// A comma is a split point only when the text after it (skipping
/// whitespace) starts with an ASCII uppercase letter or an HGVS prefix
/// (`p.`, `c.`, `g.`). An empty cell yields one empty token.
///
/// # Errors
///
/// Returns `Error::DataIntegrity` if the heuristic produces an empty token
/// (a leading comma, or nothing between two split points), since that means
/// the cell cannot be tokenized into variant descriptions.
pub fn split_variants(cell: &str) -> Result<Vec<String>> {
    if cell.trim().is_empty() {
        return Ok(vec![String::new()]);
    }

    let mut tokens = Vec::new();
    let mut start = 0;
    for (idx, ch) in cell.char_indices() {
        if ch != ',' {
            continue;
        }
        let rest = cell[idx + 1..].trim_start();
        if starts_descriptor(rest) {
            tokens.push(cell[start..idx].trim().to_string());
            start = idx + 1;
        }
    }
    tokens.push(cell[start..].trim().to_string());

    if tokens.iter().any(String::is_empty) {
        return Err(Error::DataIntegrity(format!(
            "variant cell {cell:?} cannot be tokenized: split produced an empty token"
        )));
    }
    Ok(tokens)
}

// True when the text starts a new variant descriptor: uppercase letter, or
// an HGVS prefix like "p.Arg100His".
fn starts_descriptor(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => true,
        Some('p' | 'c' | 'g') => chars.next() == Some('.'),
        _ => false,
    }
}
