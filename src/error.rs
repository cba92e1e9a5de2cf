//! Error types for pmkb-db
//!
//! Normalization failures are fatal for the whole run; matcher failures are
//! per-query. The binaries map these variants onto stable exit codes.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// pmkb-db error types
#[derive(Error, Debug)]
pub enum Error {
    /// Required sheet or column missing from the input table
    #[error("input format error: {0}")]
    InputFormat(String),

    /// Source data violates a stated coercion rule (uncoercible tier,
    /// untokenizable variant list)
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// Matcher called with an incomplete sample variant
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Persistence target unwritable or unreadable
    #[error("storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Report template error
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl Error {
    /// Stable process exit code for this error.
    ///
    /// 2 = invalid input (format or query contract), 3 = data integrity,
    /// 1 = anything else. 0 is reserved for success.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InputFormat(_) | Self::InvalidQuery(_) => 2,
            Self::DataIntegrity(_) => 3,
            _ => 1,
        }
    }
}
