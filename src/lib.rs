//! # pmkb-db: Clinical-Genomics Knowledge Base
//!
//! pmkb-db normalizes a curated clinical-genomics knowledge sheet — one row
//! per curated fact, with multi-valued comma-delimited cells — into atomic,
//! queryable tables, and looks up the interpretations that apply to a
//! sample's reported variants.
//!
//! ## Pipeline
//!
//! ```text
//! sheet (CSV) ──ingest──> RawTable ──normalize──> KnowledgeBase
//!                                                    │
//!                  entries.csv / interpretations.tsv / SQLite / term lists
//!                                                    │
//! sample export ──report──> matcher lookups ──> HTML report
//! ```
//!
//! The derived tables are immutable once built; persistence always goes
//! through atomic write-then-rename so concurrent readers never observe a
//! partial artifact.
//!
//! ## Example Usage
//!
//! ```rust
//! use pmkb_db::matcher::TierOrder;
//! use pmkb_db::model::{RawFact, SampleVariant};
//! use pmkb_db::normalize;
//!
//! # fn main() -> pmkb_db::Result<()> {
//! let fact = RawFact::builder(0, "EGFR")
//!     .tumor_types(vec!["Lung Cancer".into(), "Glioma".into()])
//!     .tissue_types(vec!["Lung".into()])
//!     .variants(vec!["L858R".into()])
//!     .tier(1)
//!     .interpretation("Sensitizing EGFR mutation")
//!     .build();
//!
//! let kb = normalize::expand_facts(&[fact]);
//! assert_eq!(kb.entry_count(), 2);
//!
//! let sample = SampleVariant::new("EGFR", "L858R");
//! let found = kb.find_interpretations(&sample, TierOrder::default())?;
//! assert_eq!(found.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod ingest;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod report;
pub mod store;

pub use error::{Error, Result};
