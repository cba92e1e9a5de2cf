//! Normalization: raw sheet rows into the derived tables
//!
//! Transforms the denormalized curated sheet — one row per fact, with
//! multi-valued comma-delimited cells — into the fully atomic `Entries`
//! table and the per-fact `Interpretations` table.
//!
//! Stages, each with its own checked rule:
//!
//! 1. citation collapsing (empty cells dropped, remainder newline-joined)
//! 2. tier coercion (empty ⇒ 0, non-numeric fails the run)
//! 3. multi-value splitting ([`split`])
//! 4. cross-expansion (one entry per tumor × tissue × variant combination)
//!
//! The whole run is deterministic: facts are processed in source order and
//! expansion iterates tumor, then tissue, then variant, so repeated runs on
//! identical input produce identical tables.

pub mod split;

use tracing::{debug, info};

use crate::ingest::RawTable;
use crate::model::{Entry, Interpretation, KnowledgeBase, RawFact};
use crate::{Error, Result};

/// Normalize the raw sheet into a knowledge base.
///
/// Equivalent to [`facts_from_table`] followed by [`expand_facts`].
///
/// # Errors
///
/// Returns `Error::DataIntegrity` on an uncoercible tier or an
/// untokenizable variant cell. A failed run yields no knowledge base at all;
/// callers must not publish partial artifacts.
pub fn normalize(table: &RawTable) -> Result<KnowledgeBase> {
    let facts = facts_from_table(table)?;
    let kb = expand_facts(&facts);
    info!(
        facts = facts.len(),
        entries = kb.entry_count(),
        "normalized knowledge sheet"
    );
    Ok(kb)
}

/// Parse every sheet row into a typed [`RawFact`].
///
/// `source_id` is the zero-based row position, assigned here and never
/// recomputed.
///
/// # Errors
///
/// Returns `Error::DataIntegrity` if any row has a non-numeric tier or a
/// variant cell the splitting heuristic cannot tokenize.
pub fn facts_from_table(table: &RawTable) -> Result<Vec<RawFact>> {
    let cols = *table.columns();
    let mut facts = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let source_id = row as u64;
        let tier = coerce_tier(table.cell(row, cols.tier), source_id)?;
        let variants =
            split::split_variants(table.cell(row, cols.variant)).map_err(|e| match e {
                Error::DataIntegrity(msg) => {
                    Error::DataIntegrity(format!("source row {source_id}: {msg}"))
                }
                other => other,
            })?;
        let fact = RawFact::builder(source_id, table.cell(row, cols.gene))
            .tumor_types(split::split_list(table.cell(row, cols.tumor)))
            .tissue_types(split::split_list(table.cell(row, cols.tissue)))
            .variants(variants)
            .tier(tier)
            .interpretation(table.cell(row, cols.interpretation))
            .citations(collapse_citations(&table.citation_cells(row)))
            .build();
        facts.push(fact);
    }
    Ok(facts)
}

/// Cross-expand facts into the derived tables.
///
/// Every fact contributes |tumor| × |tissue| × |variants| entries, all
/// carrying the fact's gene and tier unchanged, plus exactly one
/// interpretation row.
#[must_use]
pub fn expand_facts(facts: &[RawFact]) -> KnowledgeBase {
    let mut entries = Vec::new();
    let mut interpretations = Vec::with_capacity(facts.len());
    for fact in facts {
        debug!(
            source_id = fact.source_id(),
            combinations = fact.expansion_count(),
            "expanding fact"
        );
        for tumor in fact.tumor_types() {
            for tissue in fact.tissue_types() {
                for variant in fact.variants() {
                    entries.push(Entry::new(
                        fact.source_id(),
                        tumor.clone(),
                        tissue.clone(),
                        variant.clone(),
                        fact.tier(),
                        fact.gene(),
                    ));
                }
            }
        }
        interpretations.push(Interpretation::new(
            fact.source_id(),
            fact.interpretation(),
            fact.citations(),
        ));
    }
    KnowledgeBase::new(entries, interpretations)
}

// Empty cells are dropped, the rest newline-joined in sheet order.
fn collapse_citations(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// Empty ⇒ 0 (unranked). Integer-valued floats are truncated the way the
// historical loader coerced them; anything else fails the run.
fn coerce_tier(cell: &str, source_id: u64) -> Result<i64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Ok(tier) = trimmed.parse::<i64>() {
        return Ok(tier);
    }
    if let Ok(tier) = trimmed.parse::<f64>() {
        if tier.is_finite() {
            return Ok(tier as i64);
        }
    }
    Err(Error::DataIntegrity(format!(
        "source row {source_id}: tier {trimmed:?} is not coercible to an integer"
    )))
}
