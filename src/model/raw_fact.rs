//! Raw Fact - one curated knowledge-base row before normalization

use serde::{Deserialize, Serialize};

/// One curated knowledge-base row, after header canonicalization and field
/// splitting but before cross-expansion.
///
/// The multi-valued fields (`tumor_types`, `tissue_types`, `variants`) keep
/// the order of the source cell. An empty source cell is represented by a
/// single empty-string token so the fact never vanishes from the derived
/// `Entries` table.
///
/// `tier` is an opaque curation rank; 0 denotes "unranked", never "best".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawFact {
    source_id: u64,
    gene: String,
    tumor_types: Vec<String>,
    tissue_types: Vec<String>,
    variants: Vec<String>,
    tier: i64,
    interpretation: String,
    citations: String,
}

impl RawFact {
    /// Create a builder for the fact at the given source row position.
    ///
    /// `source_id` is the zero-based row position in the curated sheet; it is
    /// assigned once and never recomputed.
    #[must_use]
    pub fn builder(source_id: u64, gene: impl Into<String>) -> RawFactBuilder {
        RawFactBuilder::new(source_id, gene)
    }

    /// Get the source row id.
    #[must_use]
    pub const fn source_id(&self) -> u64 {
        self.source_id
    }

    /// Get the gene symbol.
    #[must_use]
    pub fn gene(&self) -> &str {
        &self.gene
    }

    /// Get the tumor type tokens.
    #[must_use]
    pub fn tumor_types(&self) -> &[String] {
        &self.tumor_types
    }

    /// Get the tissue type tokens.
    #[must_use]
    pub fn tissue_types(&self) -> &[String] {
        &self.tissue_types
    }

    /// Get the variant descriptor tokens.
    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Get the curation tier (0 = unranked).
    #[must_use]
    pub const fn tier(&self) -> i64 {
        self.tier
    }

    /// Get the free-text clinical interpretation.
    #[must_use]
    pub fn interpretation(&self) -> &str {
        &self.interpretation
    }

    /// Get the newline-joined citations.
    #[must_use]
    pub fn citations(&self) -> &str {
        &self.citations
    }

    /// Number of entries this fact expands to: |tumor| × |tissue| × |variants|.
    #[must_use]
    pub fn expansion_count(&self) -> usize {
        self.tumor_types.len() * self.tissue_types.len() * self.variants.len()
    }
}

/// Builder for `RawFact`.
#[derive(Debug)]
pub struct RawFactBuilder {
    source_id: u64,
    gene: String,
    tumor_types: Vec<String>,
    tissue_types: Vec<String>,
    variants: Vec<String>,
    tier: i64,
    interpretation: String,
    citations: String,
}

impl RawFactBuilder {
    /// Create a new builder with required fields.
    ///
    /// Multi-valued fields default to the single empty token; tier defaults
    /// to 0 (unranked).
    #[must_use]
    pub fn new(source_id: u64, gene: impl Into<String>) -> Self {
        Self {
            source_id,
            gene: gene.into(),
            tumor_types: vec![String::new()],
            tissue_types: vec![String::new()],
            variants: vec![String::new()],
            tier: 0,
            interpretation: String::new(),
            citations: String::new(),
        }
    }

    /// Set the tumor type tokens.
    #[must_use]
    pub fn tumor_types(mut self, tokens: Vec<String>) -> Self {
        self.tumor_types = tokens;
        self
    }

    /// Set the tissue type tokens.
    #[must_use]
    pub fn tissue_types(mut self, tokens: Vec<String>) -> Self {
        self.tissue_types = tokens;
        self
    }

    /// Set the variant descriptor tokens.
    #[must_use]
    pub fn variants(mut self, tokens: Vec<String>) -> Self {
        self.variants = tokens;
        self
    }

    /// Set the curation tier.
    #[must_use]
    pub const fn tier(mut self, tier: i64) -> Self {
        self.tier = tier;
        self
    }

    /// Set the interpretation text.
    #[must_use]
    pub fn interpretation(mut self, text: impl Into<String>) -> Self {
        self.interpretation = text.into();
        self
    }

    /// Set the newline-joined citations.
    #[must_use]
    pub fn citations(mut self, citations: impl Into<String>) -> Self {
        self.citations = citations.into();
        self
    }

    /// Build the `RawFact`.
    #[must_use]
    pub fn build(self) -> RawFact {
        RawFact {
            source_id: self.source_id,
            gene: self.gene,
            tumor_types: self.tumor_types,
            tissue_types: self.tissue_types,
            variants: self.variants,
            tier: self.tier,
            interpretation: self.interpretation,
            citations: self.citations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let fact = RawFact::builder(0, "EGFR").build();
        assert_eq!(fact.source_id(), 0);
        assert_eq!(fact.gene(), "EGFR");
        assert_eq!(fact.tier(), 0);
        assert_eq!(fact.tumor_types(), &[String::new()]);
        assert_eq!(fact.expansion_count(), 1);
    }

    #[test]
    fn test_expansion_count() {
        let fact = RawFact::builder(3, "BRAF")
            .tumor_types(vec!["Melanoma".into(), "Colorectal Cancer".into()])
            .tissue_types(vec!["Skin".into()])
            .variants(vec!["V600E".into(), "V600K".into(), "V600D".into()])
            .build();
        assert_eq!(fact.expansion_count(), 6);
    }
}
