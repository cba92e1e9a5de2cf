//! Knowledge base data model
//!
//! Typed records replacing the dynamic table manipulation of the original
//! curation pipeline: every coercion is explicit and checked.
//!
//! ## Schema Overview
//!
//! ```text
//! RawFact (1) ──< Entry (N)   [cross-expansion of tumor × tissue × variant]
//!     │
//!     └──  Interpretation (1) [free text + newline-joined citations]
//! ```
//!
//! `SampleVariant` is the matcher's ephemeral query input; `KnowledgeBase`
//! is the immutable pair of derived tables the matcher reads.

mod entry;
mod interpretation;
mod knowledge_base;
mod raw_fact;
mod sample_variant;

pub use entry::Entry;
pub use interpretation::Interpretation;
pub use knowledge_base::KnowledgeBase;
pub use raw_fact::{RawFact, RawFactBuilder};
pub use sample_variant::{SampleVariant, SampleVariantBuilder};
