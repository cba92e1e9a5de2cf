//! Knowledge sheet ingest
//!
//! Reads the curated Interpretations sheet (exported as CSV) into a
//! [`RawTable`]: the untyped row data plus the resolved positions of the
//! canonical columns. Header canonicalization happens here; all value-level
//! coercion is left to the normalizer so its rules stay testable in one
//! place.
//!
//! Auto-generated spreadsheet columns (empty header, or pandas-style
//! `Unnamed: N`) are never addressed by name. Ones positioned at or after
//! the first citation column still contribute their cell contents to the
//! collapsed citation list, matching the sheet's layout where overflow
//! citation cells spill into unnamed columns.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::{Error, Result};

/// Canonical header names expected on the Interpretations sheet.
const COL_TUMOR: &str = "Tumor Type(s)";
const COL_TISSUE: &str = "Tissue Type(s)";
const COL_VARIANT: &str = "Variant(s)";
const COL_GENE: &str = "Gene";
const COL_TIER: &str = "Tier";
const COL_INTERPRETATION: &str = "Interpretations";
const COL_CITATION: &str = "Citations";

/// Resolved zero-based positions of the canonical columns.
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndex {
    /// Gene symbol column.
    pub gene: usize,
    /// Tumor type(s) column.
    pub tumor: usize,
    /// Tissue type(s) column.
    pub tissue: usize,
    /// Variant(s) column.
    pub variant: usize,
    /// Tier column.
    pub tier: usize,
    /// Interpretation text column.
    pub interpretation: usize,
    /// First citation column; every column from here on is a citation cell.
    pub citation_start: usize,
}

/// The raw Interpretations sheet: headers, rows, and resolved columns.
///
/// Rows are kept exactly as read (no trimming, no splitting); ragged rows
/// read back as empty cells. Row position in this table is what the
/// normalizer assigns as `source_id`.
#[derive(Debug, Clone)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    columns: ColumnIndex,
}

impl RawTable {
    /// Read the sheet from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the file cannot be opened, `Error::Csv`
    /// on malformed CSV, and `Error::InputFormat` if a required column is
    /// missing.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Storage(format!("cannot open knowledge sheet {path:?}: {e}")))?;
        let table = Self::from_reader(file)?;
        info!(
            rows = table.row_count(),
            path = %path.display(),
            "loaded knowledge sheet"
        );
        Ok(table)
    }

    /// Read the sheet from any CSV source.
    ///
    /// # Errors
    ///
    /// Returns `Error::Csv` on malformed CSV and `Error::InputFormat` if a
    /// required column is missing.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(ToString::to_string)
            .collect();
        let columns = resolve_columns(&headers)?;

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(ToString::to_string).collect());
        }

        Ok(Self {
            headers,
            rows,
            columns,
        })
    }

    /// Get the header row as read from the sheet.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get the resolved column positions.
    #[must_use]
    pub const fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get one cell; out-of-range positions (ragged rows) read as empty.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    /// All citation cells of one row, left to right, empty cells included.
    #[must_use]
    pub fn citation_cells(&self, row: usize) -> Vec<&str> {
        let Some(r) = self.rows.get(row) else {
            return Vec::new();
        };
        if self.columns.citation_start >= r.len() {
            return Vec::new();
        }
        r[self.columns.citation_start..]
            .iter()
            .map(String::as_str)
            .collect()
    }
}

fn resolve_columns(headers: &[String]) -> Result<ColumnIndex> {
    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::InputFormat(format!("required column {name:?} not found")))
    };

    Ok(ColumnIndex {
        gene: find(COL_GENE)?,
        tumor: find(COL_TUMOR)?,
        tissue: find(COL_TISSUE)?,
        variant: find(COL_VARIANT)?,
        tier: find(COL_TIER)?,
        interpretation: find(COL_INTERPRETATION)?,
        citation_start: find(COL_CITATION)?,
    })
}
