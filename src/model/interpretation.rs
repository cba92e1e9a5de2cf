//! Interpretation - clinical free text and citations for one source row

use serde::{Deserialize, Serialize};

/// The clinical interpretation tied to one source row.
///
/// Keyed uniquely by `source_id`. `citations` is a single newline-joined
/// string, in the left-to-right order the citation cells appeared in the
/// source sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interpretation {
    source_id: u64,
    text: String,
    citations: String,
}

impl Interpretation {
    /// Create a new interpretation.
    #[must_use]
    pub fn new(source_id: u64, text: impl Into<String>, citations: impl Into<String>) -> Self {
        Self {
            source_id,
            text: text.into(),
            citations: citations.into(),
        }
    }

    /// Get the source row id.
    #[must_use]
    pub const fn source_id(&self) -> u64 {
        self.source_id
    }

    /// Get the interpretation text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the newline-joined citations.
    #[must_use]
    pub fn citations(&self) -> &str {
        &self.citations
    }
}
