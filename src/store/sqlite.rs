//! SQLite knowledge store
//!
//! The relational form of the knowledge base: an `entries` table and an
//! `interpretations` table with the same schemas as the flat artifacts. The
//! database is rebuilt wholesale on every publish; the report path reloads
//! it read-only.

use std::fs;
use std::path::Path;

use rusqlite::Connection;
use tracing::info;

use crate::model::{Entry, Interpretation, KnowledgeBase};
use crate::{Error, Result};

const SCHEMA: &str = r"
DROP TABLE IF EXISTS entries;
DROP TABLE IF EXISTS interpretations;

CREATE TABLE interpretations(
  source INTEGER PRIMARY KEY,
  interpretation TEXT NOT NULL,
  citation TEXT NOT NULL
);

CREATE TABLE entries(
  source INTEGER NOT NULL,
  tumor_type TEXT NOT NULL,
  tissue_type TEXT NOT NULL,
  variant TEXT NOT NULL,
  tier INTEGER NOT NULL,
  gene TEXT NOT NULL,
  FOREIGN KEY(source) REFERENCES interpretations(source)
);
CREATE INDEX idx_entries_gene_variant ON entries(gene, variant);
";

/// Publish the knowledge base as a SQLite database.
///
/// The database is built at a staging path and renamed into place, so
/// concurrent readers of the published path never see a half-built store.
///
/// # Errors
///
/// Returns `Error::Sqlite` on database failures and `Error::Storage` if the
/// staged file cannot be renamed into place.
pub fn save<P: AsRef<Path>>(kb: &KnowledgeBase, path: P) -> Result<()> {
    let path = path.as_ref();
    let staging = super::staging_path(path);
    // a stale staging db would otherwise be opened and appended to
    if staging.exists() {
        fs::remove_file(&staging)
            .map_err(|e| Error::Storage(format!("cannot clear staging file {staging:?}: {e}")))?;
    }

    let mut conn = Connection::open(&staging)?;
    conn.execute_batch(SCHEMA)?;

    let tx = conn.transaction()?;
    {
        let mut insert_interp = tx.prepare(
            "INSERT INTO interpretations(source, interpretation, citation) VALUES (?1, ?2, ?3)",
        )?;
        for interp in kb.interpretations() {
            insert_interp.execute((interp.source_id(), interp.text(), interp.citations()))?;
        }

        let mut insert_entry = tx.prepare(
            "INSERT INTO entries(source, tumor_type, tissue_type, variant, tier, gene) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for entry in kb.entries() {
            insert_entry.execute((
                entry.source_id(),
                entry.tumor_type(),
                entry.tissue_type(),
                entry.variant(),
                entry.tier(),
                entry.gene(),
            ))?;
        }
    }
    tx.commit()?;
    drop(conn);

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        Error::Storage(format!("cannot publish database {path:?}: {e}"))
    })?;
    info!(
        entries = kb.entry_count(),
        interpretations = kb.interpretation_count(),
        path = %path.display(),
        "published SQLite store"
    );
    Ok(())
}

/// Load a knowledge base from a published SQLite store.
///
/// # Errors
///
/// Returns `Error::Storage` if the database does not exist and
/// `Error::Sqlite` if it cannot be read.
pub fn load<P: AsRef<Path>>(path: P) -> Result<KnowledgeBase> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::Storage(format!(
            "knowledge store {path:?} does not exist"
        )));
    }
    let conn = Connection::open(path)?;

    let mut stmt = conn.prepare(
        "SELECT source, tumor_type, tissue_type, variant, tier, gene FROM entries ORDER BY rowid",
    )?;
    let entries = stmt
        .query_map([], |row| {
            Ok(Entry::new(
                row.get::<_, u64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<Entry>>>()?;

    let mut stmt = conn.prepare(
        "SELECT source, interpretation, citation FROM interpretations ORDER BY source",
    )?;
    let interpretations = stmt
        .query_map([], |row| {
            Ok(Interpretation::new(
                row.get::<_, u64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<Interpretation>>>()?;

    info!(
        entries = entries.len(),
        interpretations = interpretations.len(),
        path = %path.display(),
        "loaded SQLite store"
    );
    Ok(KnowledgeBase::new(entries, interpretations))
}
