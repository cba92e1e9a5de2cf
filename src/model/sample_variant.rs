//! Sample Variant - one clinically reported variant to look up

use serde::{Deserialize, Serialize};

/// A variant reported for one sample, as parsed from a clinical run export.
///
/// `gene` and `variant_description` are the lookup key; the optional tumor
/// and tissue contexts further restrict matching when present. Instances are
/// ephemeral, one per reported variant in a report run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleVariant {
    gene: String,
    variant_description: String,
    tumor_context: Option<String>,
    tissue_context: Option<String>,
}

impl SampleVariant {
    /// Create a sample variant with no tumor/tissue context.
    #[must_use]
    pub fn new(gene: impl Into<String>, variant_description: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
            variant_description: variant_description.into(),
            tumor_context: None,
            tissue_context: None,
        }
    }

    /// Create a builder for a sample variant with optional contexts.
    #[must_use]
    pub fn builder(
        gene: impl Into<String>,
        variant_description: impl Into<String>,
    ) -> SampleVariantBuilder {
        SampleVariantBuilder::new(gene, variant_description)
    }

    /// Get the gene symbol.
    #[must_use]
    pub fn gene(&self) -> &str {
        &self.gene
    }

    /// Get the variant descriptor.
    #[must_use]
    pub fn variant_description(&self) -> &str {
        &self.variant_description
    }

    /// Get the tumor context, if reported.
    #[must_use]
    pub fn tumor_context(&self) -> Option<&str> {
        self.tumor_context.as_deref()
    }

    /// Get the tissue context, if reported.
    #[must_use]
    pub fn tissue_context(&self) -> Option<&str> {
        self.tissue_context.as_deref()
    }
}

/// Builder for `SampleVariant`.
#[derive(Debug)]
pub struct SampleVariantBuilder {
    gene: String,
    variant_description: String,
    tumor_context: Option<String>,
    tissue_context: Option<String>,
}

impl SampleVariantBuilder {
    /// Create a new builder with the lookup key fields.
    #[must_use]
    pub fn new(gene: impl Into<String>, variant_description: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
            variant_description: variant_description.into(),
            tumor_context: None,
            tissue_context: None,
        }
    }

    /// Restrict matching to this tumor type.
    #[must_use]
    pub fn tumor_context(mut self, tumor: impl Into<String>) -> Self {
        self.tumor_context = Some(tumor.into());
        self
    }

    /// Restrict matching to this tissue type.
    #[must_use]
    pub fn tissue_context(mut self, tissue: impl Into<String>) -> Self {
        self.tissue_context = Some(tissue.into());
        self
    }

    /// Build the `SampleVariant`.
    #[must_use]
    pub fn build(self) -> SampleVariant {
        SampleVariant {
            gene: self.gene,
            variant_description: self.variant_description,
            tumor_context: self.tumor_context,
            tissue_context: self.tissue_context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_context() {
        let sv = SampleVariant::new("EGFR", "L858R");
        assert_eq!(sv.gene(), "EGFR");
        assert_eq!(sv.variant_description(), "L858R");
        assert!(sv.tumor_context().is_none());
        assert!(sv.tissue_context().is_none());
    }

    #[test]
    fn test_builder_contexts() {
        let sv = SampleVariant::builder("BRAF", "V600E")
            .tumor_context("Melanoma")
            .tissue_context("Skin")
            .build();
        assert_eq!(sv.tumor_context(), Some("Melanoma"));
        assert_eq!(sv.tissue_context(), Some("Skin"));
    }
}
