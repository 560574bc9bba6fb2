//! CSV loading with load-once caching.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use once_cell::sync::OnceCell;

use crate::dataset::table::{Dataset, Value};
use crate::error::AnalysisError;

impl Dataset {
    /// Parse a dataset from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataUnavailable`] if the file cannot be
    /// opened or parsed.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AnalysisError::DataUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Parse a dataset from any CSV byte source.
    ///
    /// The first record is the header row; every field is typed via
    /// [`Value::parse`]. Rows whose field count differs from the header
    /// are malformed and fail the whole load.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataUnavailable`] on any parse failure.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, AnalysisError> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let names: Vec<String> = rdr
            .headers()
            .map_err(|e| AnalysisError::DataUnavailable(format!("cannot read header: {}", e)))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if names.is_empty() {
            return Err(AnalysisError::DataUnavailable(
                "header row is empty".to_string(),
            ));
        }

        let mut columns: Vec<Vec<Value>> = vec![Vec::new(); names.len()];
        for (row, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| {
                AnalysisError::DataUnavailable(format!("malformed row {}: {}", row + 2, e))
            })?;
            for (i, field) in record.iter().enumerate() {
                columns[i].push(Value::parse(field));
            }
        }

        Dataset::from_columns(names, columns)
    }
}

/// Handle that loads a dataset at most once per process.
///
/// Repeated [`load`](DatasetCache::load) calls return the same in-memory
/// table without re-reading the source; concurrent first loads are
/// serialized so the parse happens exactly once. The cache is an owned
/// value passed to callers, never a hidden module-level global.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceCell<Dataset>,
}

impl DatasetCache {
    /// Create a cache for the dataset at `path`. Nothing is read yet.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Source file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the dataset, reading the source on the first call only.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataUnavailable`] if the source cannot be
    /// read or parsed. A failed load is not cached; a later call retries.
    pub fn load(&self) -> Result<&Dataset, AnalysisError> {
        self.cell
            .get_or_try_init(|| Dataset::from_csv_path(&self.path))
    }
}
