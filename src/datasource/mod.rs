//! Reading operation batches from JSON input.

use crate::domain::Operation;
use serde_json::error::Category as JsonErrorCategory;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Parse a JSON array of operation records.
///
/// # Returns
/// Operations in file order. The order is preserved as-is; callers are
/// expected to supply them sorted by date.
///
/// # Errors
/// Fails on I/O errors, malformed JSON, invalid dates or amounts, and on any
/// operation with a negative amount.
pub fn read_operations<R: Read>(reader: R) -> Result<Vec<Operation>, DataSourceError> {
    let operations: Vec<Operation> =
        serde_json::from_reader(BufReader::new(reader)).map_err(|e| match e.classify() {
            JsonErrorCategory::Io => DataSourceError::Io(e.to_string()),
            _ => DataSourceError::Parse(e.to_string()),
        })?;

    if let Some((index, operation)) = operations
        .iter()
        .enumerate()
        .find(|(_, operation)| operation.amount.is_negative())
    {
        return Err(DataSourceError::InvalidOperation {
            index,
            reason: format!("negative amount {}", operation.amount),
        });
    }

    debug!(count = operations.len(), "Read operations");
    Ok(operations)
}

/// Open `path` and parse it with [`read_operations`].
pub fn read_operations_from_path(path: impl AsRef<Path>) -> Result<Vec<Operation>, DataSourceError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| DataSourceError::Io(format!("{}: {}", path.display(), e)))?;
    read_operations(file)
}

/// Error type for reading operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    /// The input could not be opened or read.
    Io(String),
    /// The input is not a valid JSON array of operations.
    Parse(String),
    /// A well-formed record holds an unusable value.
    InvalidOperation { index: usize, reason: String },
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::Io(msg) => write!(f, "I/O error: {}", msg),
            DataSourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            DataSourceError::InvalidOperation { index, reason } => {
                write!(f, "Invalid operation at index {}: {}", index, reason)
            }
        }
    }
}

impl std::error::Error for DataSourceError {}
