//! Interpretation lookup
//!
//! Given one sample-reported variant and the derived tables, return every
//! distinct curated interpretation whose entries match it. Matching is exact
//! string equality throughout (gene, variant, and the optional tumor/tissue
//! contexts); there is no fuzzy or substring matching.
//!
//! One source row can match through several of its tumor/tissue
//! combinations; the matcher deduplicates on `source_id` so each
//! interpretation appears once in the output.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Entry, Interpretation, SampleVariant};
use crate::{Error, Result};

/// Tier ordering strategy for matcher output.
///
/// Tier 0 means "no tier recorded", not "best". The historical report order
/// is plain ascending, which puts unranked rows first; that is an artifact
/// of the missing-value default, so the strategy is explicit and callers can
/// choose to push unranked rows to the end instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TierOrder {
    /// Ascending numeric tier; unranked (tier 0) sorts first.
    #[default]
    UnrankedFirst,
    /// Ranked tiers ascending; unranked (tier 0) sorts last.
    UnrankedLast,
}

impl TierOrder {
    /// Compare two tier values under this strategy.
    #[must_use]
    pub fn compare(self, a: i64, b: i64) -> std::cmp::Ordering {
        match self {
            Self::UnrankedFirst => a.cmp(&b),
            Self::UnrankedLast => match (a, b) {
                (0, 0) => std::cmp::Ordering::Equal,
                (0, _) => std::cmp::Ordering::Greater,
                (_, 0) => std::cmp::Ordering::Less,
                (a, b) => a.cmp(&b),
            },
        }
    }
}

/// Find all distinct interpretations matching one sample variant.
///
/// Entries are filtered on exact gene and variant equality, then on the
/// sample's tumor/tissue contexts when those are present. Surviving entries
/// are deduplicated by `source_id` and resolved to their interpretations,
/// ordered by `order` with `source_id` as the tie-break.
///
/// # Errors
///
/// Returns `Error::InvalidQuery` if the sample has an empty variant
/// description. A gene absent from the entries table is not an error; the
/// result is simply empty.
pub fn find_interpretations(
    sample: &SampleVariant,
    entries: &[Entry],
    interpretations: &[Interpretation],
    order: TierOrder,
) -> Result<Vec<Interpretation>> {
    if sample.variant_description().is_empty() {
        return Err(Error::InvalidQuery(format!(
            "sample variant for gene {:?} has no variant description",
            sample.gene()
        )));
    }

    // distinct matching source ids, remembering each row's tier
    let mut tiers: HashMap<u64, i64> = HashMap::new();
    for entry in entries.iter().filter(|e| entry_matches(e, sample)) {
        tiers.entry(entry.source_id()).or_insert(entry.tier());
    }

    let mut matched: Vec<(u64, i64)> = tiers.into_iter().collect();
    matched.sort_by(|(id_a, tier_a), (id_b, tier_b)| {
        order.compare(*tier_a, *tier_b).then(id_a.cmp(id_b))
    });

    let by_id: HashMap<u64, &Interpretation> = interpretations
        .iter()
        .map(|interp| (interp.source_id(), interp))
        .collect();

    let results: Vec<Interpretation> = matched
        .iter()
        .filter_map(|(id, _)| by_id.get(id).copied().cloned())
        .collect();

    debug!(
        gene = sample.gene(),
        variant = sample.variant_description(),
        matches = results.len(),
        "interpretation lookup"
    );
    Ok(results)
}

fn entry_matches(entry: &Entry, sample: &SampleVariant) -> bool {
    if entry.gene() != sample.gene() || entry.variant() != sample.variant_description() {
        return false;
    }
    if let Some(tumor) = sample.tumor_context() {
        if entry.tumor_type() != tumor {
            return false;
        }
    }
    if let Some(tissue) = sample.tissue_context() {
        if entry.tissue_type() != tissue {
            return false;
        }
    }
    true
}
