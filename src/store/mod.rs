//! Artifact persistence
//!
//! Writers for the four flat artifacts derived from a knowledge base:
//!
//! - entries: comma-delimited, every field quoted
//! - interpretations: tab-delimited, UTF-16LE with BOM (the downstream
//!   consumer's expected encoding, deliberately distinct from entries)
//! - tumor / tissue term lists: distinct values, one per line
//!
//! Every write is staged next to the target and renamed into place, so a
//! normalizer re-run never exposes a partial artifact to concurrent readers
//! of the published path.

pub mod sqlite;

use std::fs;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use crate::model::KnowledgeBase;
use crate::{Error, Result};

/// Header of the entries artifact.
const ENTRIES_HEADER: [&str; 6] = ["Source", "TumorType", "TissueType", "Variant", "Tier", "Gene"];

/// Header of the interpretations artifact.
const INTERPRETATIONS_HEADER: [&str; 3] = ["Source", "Interpretation", "Citation"];

/// Write the entries artifact: comma-delimited, all fields quoted.
///
/// # Errors
///
/// Returns `Error::Storage` (or `Error::Io`) if the target is unwritable.
pub fn write_entries_csv<P: AsRef<Path>>(kb: &KnowledgeBase, path: P) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    writer.write_record(ENTRIES_HEADER)?;
    for entry in kb.entries() {
        writer.write_record([
            entry.source_id().to_string().as_str(),
            entry.tumor_type(),
            entry.tissue_type(),
            entry.variant(),
            entry.tier().to_string().as_str(),
            entry.gene(),
        ])?;
    }
    let bytes = finish(writer)?;
    publish(path.as_ref(), &bytes)?;
    info!(rows = kb.entry_count(), path = %path.as_ref().display(), "wrote entries artifact");
    Ok(())
}

/// Write the interpretations artifact: tab-delimited, UTF-16LE with BOM.
///
/// # Errors
///
/// Returns `Error::Storage` (or `Error::Io`) if the target is unwritable.
pub fn write_interpretations_tsv<P: AsRef<Path>>(kb: &KnowledgeBase, path: P) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());
    writer.write_record(INTERPRETATIONS_HEADER)?;
    for interp in kb.interpretations() {
        writer.write_record([
            interp.source_id().to_string().as_str(),
            interp.text(),
            interp.citations(),
        ])?;
    }
    let staged = finish(writer)?;
    let text = String::from_utf8(staged)
        .map_err(|e| Error::Storage(format!("interpretations artifact is not valid UTF-8: {e}")))?;
    publish(path.as_ref(), &encode_utf16le(&text))?;
    info!(
        rows = kb.interpretation_count(),
        path = %path.as_ref().display(),
        "wrote interpretations artifact"
    );
    Ok(())
}

/// Write the distinct tumor type terms, one per line.
///
/// # Errors
///
/// Returns `Error::Storage` (or `Error::Io`) if the target is unwritable.
pub fn write_tumor_terms<P: AsRef<Path>>(kb: &KnowledgeBase, path: P) -> Result<()> {
    write_terms(&kb.distinct_tumor_types(), path.as_ref())?;
    info!(path = %path.as_ref().display(), "wrote tumor term list");
    Ok(())
}

/// Write the distinct tissue type terms, one per line.
///
/// # Errors
///
/// Returns `Error::Storage` (or `Error::Io`) if the target is unwritable.
pub fn write_tissue_terms<P: AsRef<Path>>(kb: &KnowledgeBase, path: P) -> Result<()> {
    write_terms(&kb.distinct_tissue_types(), path.as_ref())?;
    info!(path = %path.as_ref().display(), "wrote tissue term list");
    Ok(())
}

fn write_terms(terms: &[&str], path: &Path) -> Result<()> {
    let mut text = String::new();
    for term in terms {
        text.push_str(term);
        text.push('\n');
    }
    publish(path, text.as_bytes())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| Error::Storage(format!("cannot flush artifact buffer: {}", e.error())))
}

// BOM followed by UTF-16 code units, little endian.
fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&0xFEFF_u16.to_le_bytes());
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Stage the bytes next to the target, then rename into place.
///
/// # Errors
///
/// Returns `Error::Storage` if the staging file cannot be written or the
/// rename fails.
pub fn publish(path: &Path, bytes: &[u8]) -> Result<()> {
    let staging = staging_path(path);
    fs::write(&staging, bytes)
        .map_err(|e| Error::Storage(format!("cannot write staging file {staging:?}: {e}")))?;
    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        Error::Storage(format!("cannot publish artifact {path:?}: {e}"))
    })
}

fn staging_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().map_or_else(
        || std::ffi::OsString::from("artifact"),
        std::ffi::OsStr::to_os_string,
    );
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, Interpretation};

    fn sample_kb() -> KnowledgeBase {
        KnowledgeBase::new(
            vec![
                Entry::new(0, "Lung Cancer", "Lung", "L858R", 1, "EGFR"),
                Entry::new(0, "Glioma", "Lung", "L858R", 1, "EGFR"),
            ],
            vec![Interpretation::new(0, "sensitizing", "PMID 1\nPMID 2")],
        )
    }

    #[test]
    fn test_entries_artifact_quotes_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.csv");
        write_entries_csv(&sample_kb(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"Source\",\"TumorType\",\"TissueType\",\"Variant\",\"Tier\",\"Gene\""
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"0\",\"Lung Cancer\",\"Lung\",\"L858R\",\"1\",\"EGFR\""
        );
    }

    #[test]
    fn test_interpretations_artifact_is_utf16le_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interpretations.tsv");
        write_interpretations_tsv(&sample_kb(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let text = String::from_utf16(&units).unwrap();
        assert!(text.starts_with("Source\tInterpretation\tCitation"));
        // multi-line citations stay quoted inside one field
        assert!(text.contains("\"PMID 1\nPMID 2\""));
    }

    #[test]
    fn test_term_lists_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tumors.txt");
        write_tumor_terms(&sample_kb(), &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Lung Cancer\nGlioma\n"
        );
    }

    #[test]
    fn test_publish_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.csv");
        write_entries_csv(&sample_kb(), &path).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("entries.csv.tmp").exists());
    }

    #[test]
    fn test_publish_unwritable_target_is_storage_error() {
        let err = write_entries_csv(&sample_kb(), "/nonexistent-dir/entries.csv").unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }
}
