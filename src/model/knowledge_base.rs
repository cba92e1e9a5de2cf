//! Knowledge Base - the derived entries and interpretations tables

use serde::{Deserialize, Serialize};

use super::{Entry, Interpretation, SampleVariant};
use crate::matcher::{self, TierOrder};
use crate::Result;

/// The normalized knowledge base: the `Entries` and `Interpretations` tables.
///
/// Built once by the normalizer and read-only afterwards. Entry order is the
/// deterministic cross-expansion order (source row outermost, then tumor ×
/// tissue × variant), which makes repeated normalization runs byte-identical
/// when persisted. Concurrent readers need no locking; a re-run publishes a
/// new snapshot atomically instead of mutating in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<Entry>,
    interpretations: Vec<Interpretation>,
}

impl KnowledgeBase {
    /// Create a knowledge base from already-derived tables.
    #[must_use]
    pub fn new(entries: Vec<Entry>, interpretations: Vec<Interpretation>) -> Self {
        Self {
            entries,
            interpretations,
        }
    }

    /// Get the entries table.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Get the interpretations table.
    #[must_use]
    pub fn interpretations(&self) -> &[Interpretation] {
        &self.interpretations
    }

    /// Check if both tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.interpretations.is_empty()
    }

    /// Number of rows in the entries table.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of rows in the interpretations table.
    #[must_use]
    pub fn interpretation_count(&self) -> usize {
        self.interpretations.len()
    }

    /// Distinct tumor type values, in first-encounter order.
    ///
    /// No case folding: values differing only in case are distinct terms.
    #[must_use]
    pub fn distinct_tumor_types(&self) -> Vec<&str> {
        Self::distinct(self.entries.iter().map(Entry::tumor_type))
    }

    /// Distinct tissue type values, in first-encounter order.
    #[must_use]
    pub fn distinct_tissue_types(&self) -> Vec<&str> {
        Self::distinct(self.entries.iter().map(Entry::tissue_type))
    }

    /// All distinct curated interpretations applicable to one sample variant,
    /// ordered by the given tier strategy.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidQuery` if the sample variant has no variant
    /// description. An unknown gene is not an error: the result is empty.
    pub fn find_interpretations(
        &self,
        sample: &SampleVariant,
        order: TierOrder,
    ) -> Result<Vec<Interpretation>> {
        matcher::find_interpretations(sample, &self.entries, &self.interpretations, order)
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for value in values {
            if seen.insert(value) {
                out.push(value);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_kb() -> KnowledgeBase {
        KnowledgeBase::new(
            vec![
                Entry::new(0, "Lung Cancer", "Lung", "L858R", 1, "EGFR"),
                Entry::new(0, "Glioma", "Lung", "L858R", 1, "EGFR"),
                Entry::new(1, "Melanoma", "Skin", "V600E", 2, "BRAF"),
            ],
            vec![
                Interpretation::new(0, "sensitizing mutation", "PMID 1"),
                Interpretation::new(1, "activating mutation", "PMID 2"),
            ],
        )
    }

    #[test]
    fn test_counts() {
        let kb = sample_kb();
        assert!(!kb.is_empty());
        assert_eq!(kb.entry_count(), 3);
        assert_eq!(kb.interpretation_count(), 2);
    }

    #[test]
    fn test_distinct_terms_first_encounter_order() {
        let kb = sample_kb();
        assert_eq!(
            kb.distinct_tumor_types(),
            vec!["Lung Cancer", "Glioma", "Melanoma"]
        );
        assert_eq!(kb.distinct_tissue_types(), vec!["Lung", "Skin"]);
    }

    #[test]
    fn test_distinct_terms_case_sensitive() {
        let kb = KnowledgeBase::new(
            vec![
                Entry::new(0, "Melanoma", "Skin", "V600E", 1, "BRAF"),
                Entry::new(1, "melanoma", "skin", "V600K", 1, "BRAF"),
            ],
            Vec::new(),
        );
        assert_eq!(kb.distinct_tumor_types(), vec!["Melanoma", "melanoma"]);
    }
}
