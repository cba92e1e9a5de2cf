//! Entry - one atomic (tumor, tissue, variant, gene, tier) tuple

use serde::{Deserialize, Serialize};

/// One atomic knowledge-base row after cross-expansion.
///
/// Many entries share one `source_id`; the `(source_id, tumor_type,
/// tissue_type, variant)` tuple is unique within a source row but not across
/// the whole table. `gene` and `tier` are copied unchanged from the source
/// fact onto every entry derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    source_id: u64,
    tumor_type: String,
    tissue_type: String,
    variant: String,
    tier: i64,
    gene: String,
}

impl Entry {
    /// Create a new entry.
    #[must_use]
    pub fn new(
        source_id: u64,
        tumor_type: impl Into<String>,
        tissue_type: impl Into<String>,
        variant: impl Into<String>,
        tier: i64,
        gene: impl Into<String>,
    ) -> Self {
        Self {
            source_id,
            tumor_type: tumor_type.into(),
            tissue_type: tissue_type.into(),
            variant: variant.into(),
            tier,
            gene: gene.into(),
        }
    }

    /// Get the source row id this entry was derived from.
    #[must_use]
    pub const fn source_id(&self) -> u64 {
        self.source_id
    }

    /// Get the tumor type.
    #[must_use]
    pub fn tumor_type(&self) -> &str {
        &self.tumor_type
    }

    /// Get the tissue type.
    #[must_use]
    pub fn tissue_type(&self) -> &str {
        &self.tissue_type
    }

    /// Get the variant descriptor.
    #[must_use]
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Get the curation tier (0 = unranked).
    #[must_use]
    pub const fn tier(&self) -> i64 {
        self.tier
    }

    /// Get the gene symbol.
    #[must_use]
    pub fn gene(&self) -> &str {
        &self.gene
    }
}
